//! Marketing copy for the static sections.
//!
//! Copy is data: the sections iterate these tables, so a reskin never
//! touches rendering code.

pub struct RoadmapPhase {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "$DZEN is a token built on the Solana mainnet.",
    "This isn’t some hype project. I’m a Solana dev when I’m not bussing my \
     ass in the galley. The tea and tech is made by me.",
    "Every $DZEN holder gets a shelf-stable bottle sent to them annually. \
     It’s just me and a small team running this. We handle everything \
     through Discord, keeping the process clean and transparent.",
];

pub const ROADMAP_TITLE: &str = "DZEN Roadmap";
pub const ROADMAP_INTRO: &str = "This is what’s getting done, when it’s getting done.";

pub const ROADMAP_PHASES: &[RoadmapPhase] = &[
    RoadmapPhase {
        title: "Phase 1: The Drop",
        items: &[
            "Token minted and deployed on Solana mainnet.",
            "Site launched.",
            "Community on Discord.",
        ],
    },
    RoadmapPhase {
        title: "Phase 2: Getting Seen",
        items: &[
            "Get $DZEN listed on major centralized exchanges.",
            "Push out promo in waves.",
            "Token-gated ordering through Discord.",
        ],
    },
    RoadmapPhase {
        title: "Phase 3: Real Utility",
        items: &[
            "Annual milk tea drops — shelf-stable, handcrafted, sent to holders.",
            "Build a small-scale staking model. Not for pumps, just passive return.",
        ],
    },
    RoadmapPhase {
        title: "Phase 4: Scaling Without Selling Out",
        items: &[
            "Expand tea drops. More flavors, more precision.",
            "Integrate with other Solana tools and projects.",
        ],
    },
    RoadmapPhase {
        title: "Phase 5: Keep It Alive",
        items: &["Focus on stability. No wild promises, just consistency."],
    },
];

pub const QUOTE_TEXT: &str = "Good tea takes time. So does a good token.";
pub const QUOTE_AUTHOR: &str = "- Chef Roux";

pub const COMMUNITY_INTRO: &str = "Connect with us on:";

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Twitter",
        url: "https://x.com/chefrouxx",
    },
    SocialLink {
        label: "Discord",
        url: "https://discord.gg/Sr5yYm56vx",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/chefrouxx/",
    },
];
