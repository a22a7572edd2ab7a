//! Remediation recommendations per risk domain.

/// Recommendation strings keyed by domain name, in catalog print order.
const RECOMMENDATIONS: &[(&str, &[&str])] = &[
    (
        "Access Control & Identity Management",
        &[
            "Implement a Privileged Access Management (PAM) solution.",
            "Enforce MFA across all systems, including legacy applications.",
            "Automate user offboarding through HR-IT integration.",
            "Conduct quarterly access reviews and recertification.",
        ],
    ),
    (
        "Data Security & Privacy",
        &[
            "Adopt AES-256 encryption for data at rest; enforce TLS 1.2+ in transit.",
            "Deploy a Data Loss Prevention (DLP) solution.",
            "Establish a formal data retention schedule aligned to legal requirements.",
            "Register a Data Protection Officer (DPO) if processing personal data at scale.",
        ],
    ),
    (
        "Network & Infrastructure Security",
        &[
            "Implement network micro-segmentation to limit lateral movement.",
            "Establish a patch management policy with defined SLAs.",
            "Adopt a Zero Trust Network Access (ZTNA) framework.",
            "Schedule automated vulnerability scans and remediate findings within SLA.",
        ],
    ),
    (
        "Incident Response & Business Continuity",
        &[
            "Develop and table-top test an Incident Response Plan annually.",
            "Define and communicate escalation paths for security incidents.",
            "Test backup restoration procedures quarterly.",
            "Align BCP with ISO 22301 or equivalent standard.",
        ],
    ),
    (
        "Compliance & Governance",
        &[
            "Review and update security policies annually or after major incidents.",
            "Deliver mandatory security awareness training using phishing simulations.",
            "Establish a third-party risk assessment process for all critical vendors.",
            "Implement a SIEM solution for centralised log management and alerting.",
        ],
    ),
];

/// Look up the recommendations for a domain by name.
///
/// An unknown name yields an empty slice; missing recommendations are a
/// defined fallback, not an error.
pub fn recommendations_for(domain: &str) -> &'static [&'static str] {
    RECOMMENDATIONS
        .iter()
        .find(|(name, _)| *name == domain)
        .map(|(_, recs)| *recs)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::questions::RISK_DOMAINS;

    #[test]
    fn test_every_catalog_domain_has_recommendations() {
        for domain in RISK_DOMAINS {
            let recs = recommendations_for(domain.name);
            assert!(!recs.is_empty(), "{} has no recommendations", domain.name);
        }
    }

    #[test]
    fn test_unknown_domain_yields_empty_list() {
        assert!(recommendations_for("Physical Security").is_empty());
        assert!(recommendations_for("").is_empty());
    }

    #[test]
    fn test_recommendations_in_catalog_order() {
        let recs = recommendations_for("Access Control & Identity Management");
        assert_eq!(recs.len(), 4);
        assert!(recs[0].starts_with("Implement a Privileged Access Management"));
    }
}
