// src/roadmap/catalog.rs
//! Curated skill guide catalog
//!
//! A fixed, hand-curated table mapping skill names to learning plans. Lookup
//! is exact-match and case-sensitive; skills the catalog does not know are
//! handled by the resolver's fallback path, so the table never needs to be
//! exhaustive. Adding a skill means adding a row below - no schema change.

use std::collections::HashMap;

/// One curated learning plan: ordered video links, an effort estimate,
/// a practice project and a certificate worth targeting.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGuideEntry {
    pub videos: Vec<String>,
    pub hours: u32,
    pub project: String,
    pub certificate: String,
}

/// Immutable skill-name -> guide mapping, built once at startup and shared
/// read-only afterwards. Read-only data needs no synchronization.
#[derive(Debug)]
pub struct SkillGuideCatalog {
    entries: HashMap<String, SkillGuideEntry>,
}

/// Curated rows: (skill, videos, hours, project, certificate)
const GUIDE_ROWS: &[(&str, &[&str], u32, &str, &str)] = &[
    (
        "Docker",
        &[
            "https://www.youtube.com/watch?v=zJ6WbK9zFpI",
            "https://www.youtube.com/watch?v=PgTzP9pkaQA",
        ],
        6,
        "Build a multi-container Node+Postgres app",
        "Docker Certified Associate",
    ),
    (
        "Kubernetes",
        &[
            "https://www.youtube.com/watch?v=X48VuDVv0do",
            "https://www.youtube.com/watch?v=s_o8dwzR6p4",
        ],
        10,
        "Deploy micro-services on minikube with auto-scaling",
        "CKAD",
    ),
    (
        "AWS",
        &[
            "https://www.youtube.com/watch?v=3hLmDS179YE",
            "https://www.youtube.com/watch?v=Z027y5mxaHY",
        ],
        15,
        "Host a static site + CI/CD pipeline",
        "AWS Cloud Practitioner",
    ),
    (
        "Python",
        &[
            "https://www.youtube.com/watch?v=rfscVS0vtbw",
            "https://www.youtube.com/watch?v=7lmCu8wz8ro",
        ],
        20,
        "Automate a daily report with pandas + e-mail",
        "PCAP – Certified Associate",
    ),
    (
        "Machine Learning",
        &[
            "https://www.youtube.com/watch?v=7eh4d6sAB6A",
            "https://www.youtube.com/watch?v=NWONeJYa6rM",
        ],
        25,
        "End-to-end churn prediction API with Flask",
        "TensorFlow Developer Cert",
    ),
    (
        "SQL",
        &[
            "https://www.youtube.com/watch?v=HXV3zeQKqGY",
            "https://www.youtube.com/watch?v=9S8z8S0hw8w",
        ],
        8,
        "Design & query a Netflix-style DB",
        "Oracle SQL Certified",
    ),
    (
        "React",
        &[
            "https://www.youtube.com/watch?v=bMknfKXIFA8",
            "https://www.youtube.com/watch?v=TiSGujMifOI",
        ],
        12,
        "Todo-app + unit tests + CI deploy",
        "React Developer Cert",
    ),
    (
        "Node.js",
        &[
            "https://www.youtube.com/watch?v=TlB_eWDSMt4",
            "https://www.youtube.com/watch?v=Oe421EPjeBE",
        ],
        10,
        "REST API with auth + Swagger docs",
        "OpenJS Node.js Services Cert",
    ),
    (
        "Figma",
        &["https://www.youtube.com/watch?v=FTFaQWZBqQ8"],
        4,
        "Design a 5-screen mobile app",
        "Figma Skill Certificate",
    ),
    (
        "Git",
        &["https://www.youtube.com/watch?v=SWYqp7iY_Tc"],
        3,
        "Contribute to an open-source repo",
        "GitHub Foundations",
    ),
    (
        "JavaScript",
        &["https://www.youtube.com/watch?v=W6NZfCO5SIk"],
        8,
        "Build a weather dashboard with fetch API",
        "JavaScript Algorithms & Data Structures",
    ),
    (
        "CSS",
        &["https://www.youtube.com/watch?v=yfoY53QXElI"],
        4,
        "Clone a landing page pixel-perfect",
        "CSS Specialist",
    ),
    (
        "HTML",
        &["https://www.youtube.com/watch?v=pQN-pnXPaVg"],
        2,
        "Build accessible semantic pages",
        "HTML5 Specialist",
    ),
];

impl SkillGuideCatalog {
    /// Build the built-in catalog from the curated table.
    pub fn builtin() -> Self {
        let entries = GUIDE_ROWS
            .iter()
            .map(|(skill, videos, hours, project, certificate)| {
                (
                    skill.to_string(),
                    SkillGuideEntry {
                        videos: videos.iter().map(|v| v.to_string()).collect(),
                        hours: *hours,
                        project: project.to_string(),
                        certificate: certificate.to_string(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Exact-match, case-sensitive lookup.
    pub fn get(&self, skill: &str) -> Option<&SkillGuideEntry> {
        self.entries.get(skill)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
