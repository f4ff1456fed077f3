//! The chapter list compiled into the site.
//!
//! Registry order is significant only for ties: chapters sharing a date
//! are listed in the order they appear here.

use super::chapters::{Chapter, ChapterLinks};

pub static CHAPTERS: &[Chapter] = &[
    Chapter {
        slug: "amazon-inventory-system",
        title: "Inventory Intelligence",
        subtitle: "Amazon SDE Internship",
        description: "Built a real-time inventory forecasting system that reduced overstock by 12% across North American fulfillment centers.",
        date: "2025-08",
        tags: &["backend", "full-stack", "ai", "typescript"],
        cover_image: None,
        featured: true,
        context: "During my SDE internship at Amazon, I joined the Fulfillment Technology team working on inventory optimization. The challenge: predict demand spikes and prevent both overstock and stockouts across thousands of SKUs.",
        what_i_built: "A forecasting microservice that ingested real-time sales data, seasonal patterns, and external signals (weather, events) to generate 7-day inventory recommendations. The system integrated with existing warehouse management tools via a clean REST API.",
        key_decisions: &[
            "Chose TypeScript + Node.js for rapid iteration and strong typing",
            "Implemented a sliding window algorithm for trend detection vs. heavy ML models",
            "Built a feature flag system to gradually roll out predictions by category",
            "Designed the API to be backwards-compatible with legacy systems",
        ],
        challenges: &[
            "Handling data inconsistencies from multiple warehouse sources",
            "Balancing prediction accuracy with computational cost at scale",
            "Navigating a large codebase with minimal documentation",
        ],
        outcomes: &[
            "12% reduction in overstock for pilot categories",
            "System processed 50K+ SKU predictions daily",
            "Received offer for full-time return",
        ],
        tech_stack: &["TypeScript", "Node.js", "AWS Lambda", "DynamoDB", "CloudWatch", "React"],
        // Internal project, no public links
        links: ChapterLinks::NONE,
    },
    Chapter {
        slug: "vr-therapy-environment",
        title: "Calm Spaces",
        subtitle: "VR Therapeutic Environment",
        description: "Designed and built an immersive VR environment for anxiety therapy, used in a university research study with 40+ participants.",
        date: "2025-03",
        tags: &["vr", "unity", "design", "frontend"],
        cover_image: None,
        featured: true,
        context: "Collaborated with the Psychology department to create a VR tool for exposure therapy research. The goal was to create calming, controllable environments where therapists could guide patients through anxiety-reducing exercises.",
        what_i_built: "A Unity-based VR application featuring three procedurally-generated nature environments (forest, beach, mountain). Included biometric integration for real-time stress monitoring and therapist controls for adjusting environmental intensity.",
        key_decisions: &[
            "Used procedural generation for infinite variety without asset bloat",
            "Prioritized 90fps performance to prevent VR sickness",
            "Built a companion tablet app for therapist control during sessions",
            "Implemented gradual environment transitions to avoid startling users",
        ],
        challenges: &[
            "Optimizing complex shaders for Quest 2 standalone mode",
            "Syncing biometric data with environmental changes in real-time",
            "Designing for users with varying VR experience levels",
        ],
        outcomes: &[
            "Used in published research study with 40+ participants",
            "92% of participants reported reduced anxiety post-session",
            "Open-sourced the procedural nature system",
        ],
        tech_stack: &["Unity", "C#", "Oculus SDK", "WebSocket", "React Native"],
        links: ChapterLinks {
            live: None,
            github: Some("https://github.com/ashwinrk/calm-spaces"),
            demo: None,
        },
    },
];
