//! Report section plan and prompt construction

use serde::{Deserialize, Serialize};

/// Free-text founder and business information collected alongside the numbers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default)]
    pub business_plan: String,
    #[serde(default)]
    pub personality_type: String,
    #[serde(default)]
    pub psychometric: String,
}

/// One planned report section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    /// 1-based position in the report
    pub number: usize,
    pub title: &'static str,
    /// Material the section is written from
    pub context: String,
}

impl SectionSpec {
    /// Numbered heading, e.g. "2. Founder-Market Fit"
    pub fn heading(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }

    pub fn prompt(&self) -> String {
        build_prompt(self.title, &self.context)
    }
}

pub const OVERVIEW: &str = "Overview of Input B-Plan";
pub const FOUNDER_MARKET_FIT: &str = "Founder-Market Fit";
pub const TOTAL_ADDRESSABLE_MARKET: &str = "Total Addressable Market (TAM)";
pub const PRODUCT_MARKET_FIT: &str = "Product-Market Fit";
pub const MARKET_RESEARCH_PLAN: &str = "Market Research Plan";

/// The fixed, ordered list of sections for a profile.
///
/// Founder-market fit also sees the personality and psychometric notes;
/// every other section works from the business plan alone.
pub fn section_plan(profile: &BusinessProfile) -> Vec<SectionSpec> {
    let plan = &profile.business_plan;
    let founder_context = format!(
        "{}\n{}\n{}",
        profile.business_plan, profile.personality_type, profile.psychometric
    );

    [
        (OVERVIEW, plan.clone()),
        (FOUNDER_MARKET_FIT, founder_context),
        (TOTAL_ADDRESSABLE_MARKET, plan.clone()),
        (PRODUCT_MARKET_FIT, plan.clone()),
        (MARKET_RESEARCH_PLAN, plan.clone()),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, context))| SectionSpec {
        number: i + 1,
        title,
        context,
    })
    .collect()
}

/// Consultant prompt for one section
pub fn build_prompt(section_title: &str, context: &str) -> String {
    format!(
        "You are a top-tier startup consultant.\n\
         Write a detailed section titled \"{section_title}\" based on the following context:\n\
         {context}\n\
         Ensure the analysis is insightful, data-driven, and consultative.\n\
         Write only the content for the section."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> BusinessProfile {
        BusinessProfile {
            business_plan: "Subscription meal kits for students".into(),
            personality_type: "ENTJ".into(),
            psychometric: "High openness".into(),
        }
    }

    #[test]
    fn test_section_plan_order_and_headings() {
        let plan = section_plan(&profile());
        let headings: Vec<_> = plan.iter().map(|s| s.heading()).collect();
        assert_eq!(
            headings,
            vec![
                "1. Overview of Input B-Plan",
                "2. Founder-Market Fit",
                "3. Total Addressable Market (TAM)",
                "4. Product-Market Fit",
                "5. Market Research Plan",
            ]
        );
    }

    #[test]
    fn test_founder_fit_context_includes_personality() {
        let plan = section_plan(&profile());
        assert_eq!(plan[1].context, "Subscription meal kits for students\nENTJ\nHigh openness");
        for idx in [0, 2, 3, 4] {
            assert_eq!(plan[idx].context, "Subscription meal kits for students");
        }
    }

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt("Product-Market Fit", "A plan");
        assert!(prompt.starts_with("You are a top-tier startup consultant."));
        assert!(prompt.contains("titled \"Product-Market Fit\""));
        assert!(prompt.contains("\nA plan\n"));
        assert!(prompt.ends_with("Write only the content for the section."));
    }
}
