#![allow(dead_code)]

use vitae_core::{parse_experience, Config, Dataset, ExperienceRecord, SkillSet};
use vitae_view::ViewState;

pub const SAMPLE_CV: &str = r#"{
    "experience": [
        {
            "id": "1",
            "title": "Product Manager",
            "company": "Acme",
            "location": "Remote",
            "startDate": "2022-01",
            "description": "Owned the onboarding funnel and the experimentation roadmap",
            "tags": ["product"],
            "skills": ["React", "Experimentation"],
            "highlights": [
                "Lifted activation by 18%",
                {"text": "Rebuilt onboarding in React", "skills": ["React"]},
                {"text": "Ran weekly A/B reviews", "skills": ["Experimentation"]},
                {"text": "Partnered with sales"}
            ]
        },
        {
            "id": "2",
            "title": "Strategy Analyst",
            "company": "Initech",
            "location": "Austin",
            "startDate": "2019-01",
            "endDate": "2021-12",
            "description": "Market sizing and pricing studies for new verticals",
            "tags": ["strategy"],
            "skills": ["SQL", "Excel"],
            "highlights": [
                {"text": "Built the pricing model", "skills": ["Excel"]},
                {"text": "Automated reporting with SQL", "skills": ["SQL"]}
            ]
        },
        {
            "id": "3",
            "title": "Operations Intern",
            "company": "Globex",
            "startDate": "2018-06",
            "endDate": "2018-09",
            "tags": ["operations"]
        },
        {
            "id": "4",
            "title": "Technical Product Lead",
            "company": "Hooli",
            "startDate": "2016-03",
            "endDate": "2018-05",
            "description": "Led a platform team shipping the search indexer and design system",
            "tags": ["product", "tech"],
            "skills": ["React", "Rust", "SQL"],
            "highlights": [
                {"text": "Shipped the design system", "skills": ["React"]},
                {"text": "Rewrote the indexer in Rust", "skills": ["Rust"]},
                {"text": "Cut query latency", "skills": ["SQL", "Rust"]},
                "Mentored four engineers",
                {"text": "Ran the hiring loop", "skills": []}
            ]
        }
    ]
}"#;

pub fn sample_dataset() -> Dataset {
    parse_experience(SAMPLE_CV).unwrap()
}

pub fn sample_view() -> ViewState {
    ViewState::new(sample_dataset(), Config::default())
}

pub fn skills(names: &[&str]) -> SkillSet {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn ids(records: &[&ExperienceRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}
