//! Scripted assistant replies. Keyword matching over normalized input against
//! an ordered rule table; first match wins, with a generic fallback. This is
//! deliberately not a model.

use crate::model::assistant::AnalysisReport;

pub const GREETING: &str = "Hello! I'm your AI HR Assistant. I can help you with employee management, policy questions, performance reviews, and more. How can I assist you today?";

pub const GREETING_SUGGESTIONS: &[&str] = &[
    "How do I request time off?",
    "What's our remote work policy?",
    "I need help with performance review",
    "How do I update my information?",
];

pub struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
    suggestions: &'static [&'static str],
}

static RULES: &[Rule] = &[
    Rule {
        keywords: &["leave", "time off"],
        reply: "I can help you with leave requests! You can submit a leave request through the HR portal. Here's what you need to know:\n\n\u{2022} Submit at least 2 weeks in advance for planned leave\n\u{2022} Emergency leave can be requested same day\n\u{2022} You have 20 days of annual leave remaining\n\nWould you like me to guide you through the process?",
        suggestions: &["Submit Leave Request", "Check Leave Balance", "View Leave Policy"],
    },
    Rule {
        keywords: &["policy", "remote"],
        reply: "Our remote work policy allows flexible arrangements:\n\n\u{2022} Hybrid: 3 days office, 2 days remote\n\u{2022} Full remote available for approved roles\n\u{2022} Core hours: 10 AM - 4 PM for meetings\n\u{2022} Equipment provided for remote work\n\nWould you like to know more about any specific policy?",
        suggestions: &["Remote Work Policy", "Dress Code", "Expense Policy", "Travel Policy"],
    },
    Rule {
        keywords: &["performance", "review"],
        reply: "Performance reviews are conducted quarterly. Here's what you need to know:\n\n\u{2022} Self-assessment due by 15th of review month\n\u{2022} Manager review within 7 days\n\u{2022} 1-on-1 discussion scheduled automatically\n\u{2022} Goals and KPIs tracked in real-time\n\nYour next review is scheduled for March 15th. Would you like to prepare?",
        suggestions: &["Start Self-Assessment", "View Goals", "Schedule 1-on-1", "Performance History"],
    },
    Rule {
        keywords: &["update", "information"],
        reply: "You can update your information in the employee portal:\n\n\u{2022} Personal details: Name, address, emergency contacts\n\u{2022} Banking: Direct deposit information\n\u{2022} Benefits: Health insurance, retirement plans\n\u{2022} Skills: Certifications, training records\n\nI can guide you through any specific updates you need.",
        suggestions: &["Update Personal Info", "Change Banking Details", "Update Skills", "Benefits Enrollment"],
    },
];

const FALLBACK_REPLY: &str = "I understand you're asking about that. Let me help you find the right information. Could you please be more specific about what you need help with? I can assist with:\n\n\u{2022} Leave and time-off requests\n\u{2022} Company policies and procedures\n\u{2022} Performance reviews and goals\n\u{2022} Employee information updates\n\u{2022} Benefits and compensation\n\u{2022} Training and development";

const FALLBACK_SUGGESTIONS: &[&str] = &[
    "Leave Request",
    "Policy Information",
    "Performance Review",
    "Update Information",
];

pub struct Reply {
    pub text: &'static str,
    pub suggestions: &'static [&'static str],
}

/// Pick the scripted reply for a user message. Matching is case-insensitive
/// substring containment, in table order.
pub fn respond(input: &str) -> Reply {
    let normalized = input.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|k| normalized.contains(k)) {
            return Reply {
                text: rule.reply,
                suggestions: rule.suggestions,
            };
        }
    }
    Reply {
        text: FALLBACK_REPLY,
        suggestions: FALLBACK_SUGGESTIONS,
    }
}

/// The canned result every simulated analysis run produces.
pub fn canned_analysis() -> AnalysisReport {
    AnalysisReport {
        performance_score: 87,
        attrition_risk: 12,
        satisfaction_index: 78,
        productivity_trend: "+15%".into(),
        recommendations: vec![
            "Implement flexible work arrangements to reduce attrition risk".into(),
            "Provide additional training for 15 employees identified as high-potential".into(),
            "Consider salary adjustments for 8 employees at risk of leaving".into(),
            "Optimize team structures based on collaboration patterns".into(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_keywords_pick_the_leave_rule() {
        let reply = respond("How do I request time off?");
        assert!(reply.text.contains("leave request"));
        assert!(reply.suggestions.contains(&"Check Leave Balance"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let upper = respond("TELL ME ABOUT THE REMOTE POLICY");
        let lower = respond("tell me about the remote policy");
        assert_eq!(upper.text, lower.text);
        assert!(upper.text.contains("remote work policy"));
    }

    #[test]
    fn earlier_rules_win_over_later_ones() {
        // "leave" appears before "policy" in the table, so a message with
        // both keywords gets the leave reply.
        let reply = respond("what is the leave policy?");
        assert!(reply.text.contains("leave request"));
    }

    #[test]
    fn unmatched_input_falls_back() {
        let reply = respond("what's for lunch?");
        assert_eq!(reply.text, FALLBACK_REPLY);
        assert_eq!(reply.suggestions, FALLBACK_SUGGESTIONS);
    }

    #[test]
    fn every_rule_carries_suggestions() {
        for rule in RULES {
            assert!(!rule.suggestions.is_empty());
            assert!(!rule.keywords.is_empty());
        }
    }
}
