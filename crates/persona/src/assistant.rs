//! Scripted assistant replies.
//!
//! Each rule pairs a set of keywords with a canned answer; the first rule with
//! a keyword contained in the lower-cased question wins.

use std::time::Duration;

use rand::Rng;

/// Keywords and the reply they trigger
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl ResponseRule {
    fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|k| query.contains(k))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    /// Echo the question back with a list of topics
    Echo,
    /// Mention the attached card context if any, else a generic answer
    Contextual,
}

const CHAT_RULES: &[ResponseRule] = &[
    ResponseRule {
        keywords: &["persona", "segment"],
        response: "Your connected data shows five customer personas. High-Value Loyalists carry the \
highest LTV with a 28-day payback, while Budget Shoppers take 75 days to pay back.\n\n\
Would you like me to suggest a persona mix that improves profitability?",
    },
    ResponseRule {
        keywords: &["profit", "profitability", "revenue"],
        response: "Revenue health is trending up: sales and contribution margin both grew week over \
week while CAC fell. High-Value Loyalists drive the most profit per customer; shifting 5-10% \
more budget toward them should improve return on spend.",
    },
    ResponseRule {
        keywords: &["survey", "response"],
        response: "Survey automation is performing well, with a response rate above the industry \
average. Psychographic answers (product preferences, values, discovery channels) line up with \
the purchase-behavior personas.",
    },
    ResponseRule {
        keywords: &["cac", "acquisition", "spend"],
        response: "Acquisition efficiency is improving. Payback averages about a month across \
personas; moving budget from long-payback segments toward High-Value Loyalists shortens it \
further.",
    },
    ResponseRule {
        keywords: &["ltv", "lifetime value"],
        response: "LTV by persona ranges from $140 (Budget Shopper) to $650 (Premium Aesthete). \
Persona-specific retention campaigns are the fastest lever on lifetime value.",
    },
    ResponseRule {
        keywords: &["creative", "messaging", "ad"],
        response: "Creative direction by persona:\n\n\
- High-Value Loyalist: craftsmanship, longevity, cost per wear\n\
- Premium Aesthete: scarcity and understated luxury\n\
- Mid-Value Regular: fit, ease and everyday staples\n\n\
Want me to draft creative briefs for any of them?",
    },
    ResponseRule {
        keywords: &["help", "what can you do"],
        response: "I can help with:\n\n\
- Data analysis across Shopify, GA4, Meta, Google Ads and Klaviyo\n\
- Persona insights: LTV, CAC, payback and mix optimization\n\
- Performance metrics and profitability trends\n\
- Survey insights\n\
- Budget allocation and creative briefs\n\
- Projected impact of persona mix changes",
    },
];

const SIDEBAR_RULES: &[ResponseRule] = &[
    ResponseRule {
        keywords: &["cac", "customer acquisition"],
        response: "CAC rose over the last 30 days, driven by lower Meta conversion for mid-value \
personas. I recommend:\n\n\
1. Review creative fatigue on running campaigns\n\
2. Test persona-specific messaging angles\n\
3. Shift budget toward high-converting personas",
    },
    ResponseRule {
        keywords: &["persona", "mix"],
        response: "High-Value Loyalists are a small share of acquisitions but a large share of \
profit. Raising their target share is the biggest lever on monthly contribution margin; \
run the impact report to see the projected change.",
    },
    ResponseRule {
        keywords: &["creative", "brief"],
        response: "I can draft persona-specific creative briefs with messaging angles, hook \
variations, image prompts, channel recommendations and success metrics. Want a three-month \
roadmap for your top personas?",
    },
];

const SIDEBAR_GENERIC: &str = "Focus on metrics that tie directly to profitability:\n\n\
- LTV:CAC ratio by persona\n\
- Contribution margin trends\n\
- Payback period\n\
- Persona mix alignment\n\n\
What are you trying to optimize?";

/// Keyword-matching assistant with a fixed rule set
#[derive(Debug, Clone)]
pub struct Assistant {
    rules: &'static [ResponseRule],
    fallback: Fallback,
}

impl Assistant {
    /// Full-page chat rules
    pub fn chat() -> Self {
        Self {
            rules: CHAT_RULES,
            fallback: Fallback::Echo,
        }
    }

    /// Sidebar rules, aware of the card the question was asked from
    pub fn sidebar() -> Self {
        Self {
            rules: SIDEBAR_RULES,
            fallback: Fallback::Contextual,
        }
    }

    pub fn respond(&self, query: &str, context: Option<&str>) -> String {
        let lower = query.to_lowercase();
        if let Some(rule) = self.rules.iter().find(|r| r.matches(&lower)) {
            return rule.response.to_string();
        }

        match (self.fallback, context) {
            (Fallback::Echo, _) => format!(
                "You asked about: \"{query}\". I can help with persona analysis, profitability, \
survey insights, CAC/LTV analysis, creative recommendations or strategic planning. \
Which would you like to dig into?"
            ),
            (Fallback::Contextual, Some(context)) => format!(
                "Looking at {context}, the useful signal is whatever moves contribution margin \
rather than vanity metrics. What would you like me to analyze further?"
            ),
            (Fallback::Contextual, None) => SIDEBAR_GENERIC.to_string(),
        }
    }
}

/// Cosmetic "thinking" pause between 1 and 2 seconds
pub fn thinking_delay() -> Duration {
    Duration::from_millis(rand::rng().random_range(1_000..2_000))
}
