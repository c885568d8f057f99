pub mod use_token_view;
