//! The question catalog: five fixed risk domains, five questions each.
//!
//! Domain order and question order are part of the contract — the runner
//! walks them exactly as declared, and tie-breaking in the report falls
//! back to this order.

/// A single yes/no question within a risk domain.
#[derive(Debug, Clone, Copy)]
pub struct QuestionSpec {
    /// The prompt shown to the user.
    pub prompt: &'static str,
    /// The answer indicating a healthy control. Retained for future
    /// weighting; scoring does not consult it.
    pub expected: bool,
}

/// A named risk domain owning an ordered list of questions.
#[derive(Debug, Clone, Copy)]
pub struct DomainSpec {
    pub name: &'static str,
    pub questions: &'static [QuestionSpec],
}

impl DomainSpec {
    /// Number of questions in this domain.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

const fn q(prompt: &'static str) -> QuestionSpec {
    QuestionSpec {
        prompt,
        expected: true,
    }
}

/// The five assessed domains, in declared (and display) order.
pub const RISK_DOMAINS: &[DomainSpec] = &[
    DomainSpec {
        name: "Access Control & Identity Management",
        questions: &[
            q("Are privileged accounts reviewed and audited regularly?"),
            q("Is Multi-Factor Authentication (MFA) enforced for all users?"),
            q("Are access rights revoked promptly when staff leave?"),
            q("Is role-based access control (RBAC) implemented?"),
            q("Are shared/generic accounts prohibited?"),
        ],
    },
    DomainSpec {
        name: "Data Security & Privacy",
        questions: &[
            q("Is sensitive data encrypted at rest and in transit?"),
            q("Is a data classification policy in place?"),
            q("Are data retention and disposal policies enforced?"),
            q("Is GDPR or relevant data protection compliance maintained?"),
            q("Are data backup and recovery procedures tested regularly?"),
        ],
    },
    DomainSpec {
        name: "Network & Infrastructure Security",
        questions: &[
            q("Are firewalls and intrusion detection systems in place?"),
            q("Is network segmentation implemented?"),
            q("Are security patches applied within 30 days of release?"),
            q("Is remote access secured via VPN or Zero Trust architecture?"),
            q("Are vulnerability scans conducted at least quarterly?"),
        ],
    },
    DomainSpec {
        name: "Incident Response & Business Continuity",
        questions: &[
            q("Is there a documented and tested incident response plan?"),
            q("Are staff trained on incident reporting procedures?"),
            q("Is a Business Continuity Plan (BCP) in place and tested?"),
            q("Are critical system recovery time objectives (RTOs) defined?"),
            q("Are post-incident reviews conducted and documented?"),
        ],
    },
    DomainSpec {
        name: "Compliance & Governance",
        questions: &[
            q("Is there a current IT security policy approved by leadership?"),
            q("Are security awareness training sessions conducted annually?"),
            q("Is there a third-party/vendor risk management process?"),
            q("Are audit logs retained and regularly reviewed?"),
            q("Is there a formal risk register maintained?"),
        ],
    },
];

/// Total number of questions across all domains.
pub fn total_questions() -> usize {
    RISK_DOMAINS.iter().map(|d| d.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_domains_in_fixed_order() {
        assert_eq!(RISK_DOMAINS.len(), 5);
        assert_eq!(RISK_DOMAINS[0].name, "Access Control & Identity Management");
        assert_eq!(RISK_DOMAINS[4].name, "Compliance & Governance");
    }

    #[test]
    fn test_every_domain_has_questions() {
        for domain in RISK_DOMAINS {
            assert!(!domain.is_empty(), "{} has no questions", domain.name);
            assert_eq!(domain.len(), 5);
        }
    }

    #[test]
    fn test_total_question_count() {
        assert_eq!(total_questions(), 25);
    }

    #[test]
    fn test_prompts_are_non_empty() {
        for domain in RISK_DOMAINS {
            for question in domain.questions {
                assert!(!question.prompt.trim().is_empty());
            }
        }
    }
}
