//! Sample pitch decks used when a session starts with nothing persisted.

use crate::placeholder::{initials, svg_banner, svg_logo, LOGO_GRADIENT};
use crate::project::Project;
use chrono::{DateTime, Utc};

pub const SAMPLE_COUNT: usize = 5;

struct Sample {
    name: &'static str,
    category: &'static str,
    purpose: &'static str,
    problem: &'static str,
    solution: &'static str,
    target_market: &'static str,
    business_model: &'static str,
    team: &'static str,
    contact: &'static str,
    links: &'static str,
}

const SAMPLES: [Sample; SAMPLE_COUNT] = [
    Sample {
        name: "MasterPass",
        category: "Events / Ticketing",
        purpose: "A simple event access platform on Algorand.",
        problem: "Event organizers struggle with fraud and high fees; users juggle multiple QR apps.",
        solution: "Algorand-backed passes with on-chain ownership and instant settlement.",
        target_market: "Event organizers, venues, and promoters.",
        business_model: "Service fee per ticket + enterprise API tier.",
        team: "Core team of 3 (product, contracts, BD). Advisors from ticketing.",
        contact: "hello@masterpass.dev",
        links: "https://masterpass.dev, https://twitter.com/masterpass",
    },
    Sample {
        name: "ChainLearn",
        category: "EdTech",
        purpose: "Earn-as-you-learn courses with verifiable certificates.",
        problem: "Certificates are hard to verify; learners can't monetize progress.",
        solution: "On-chain credentials and micro-rewards via ASA.",
        target_market: "Bootcamps, MOOCs, and corporate L&D.",
        business_model: "Freemium content + issuer subscriptions.",
        team: "Team of 4 educators + 2 engineers.",
        contact: "team@chainlearn.io",
        links: "https://chainlearn.io",
    },
    Sample {
        name: "GreenCompute",
        category: "Sustainability",
        purpose: "Crowdfund green compute nodes with transparent impact.",
        problem: "Hard to trust carbon claims from infra providers.",
        solution: "Proof-of-green attestations anchored on Algorand.",
        target_market: "Web3 infra funds, climate DAOs, eco-conscious devs.",
        business_model: "Node revenue share + tokenized credits.",
        team: "Ops + climate scientists + devs.",
        contact: "hi@greencompute.xyz",
        links: "https://greencompute.xyz",
    },
    Sample {
        name: "AlgoArt Guild",
        category: "Creator Economy",
        purpose: "Collective funding for artist toolchains.",
        problem: "Artists lack upfront capital for tools and marketing.",
        solution: "Milestone-based releases with escrowed ALGO and ASA rewards.",
        target_market: "Digital artists, small studios.",
        business_model: "Platform fee + marketplace revenue share.",
        team: "Artists council, 2 engineers, 1 PM.",
        contact: "contact@algoartguild.app",
        links: "https://algoartguild.app",
    },
    Sample {
        name: "OpenLedger Tools",
        category: "DevTooling",
        purpose: "Open-source SDKs for Algorand integrations.",
        problem: "Fragmented tooling slows adoption.",
        solution: "Unified, audited libs with example apps.",
        target_market: "Startups, agencies, hackathon teams.",
        business_model: "Sponsorware + support contracts.",
        team: "OSS maintainers + security advisors.",
        contact: "oss@openledgertools.org",
        links: "https://openledgertools.org",
    },
];

/// Builds the sample set. Every record gets a fresh id and generated art;
/// all share `now` as their creation time.
pub fn sample_projects(now: DateTime<Utc>, mut next_id: impl FnMut() -> String) -> Vec<Project> {
    let (from, to) = LOGO_GRADIENT;
    SAMPLES
        .iter()
        .map(|s| Project {
            id: next_id(),
            name: s.name.into(),
            category: s.category.into(),
            purpose: s.purpose.into(),
            problem: s.problem.into(),
            solution: s.solution.into(),
            target_market: s.target_market.into(),
            business_model: s.business_model.into(),
            team: s.team.into(),
            contact: s.contact.into(),
            links: s.links.into(),
            logo_data_url: Some(svg_logo(&initials(s.name), from, to)),
            image_data_url: Some(svg_banner(s.name)),
            created_at: now,
        })
        .collect()
}
