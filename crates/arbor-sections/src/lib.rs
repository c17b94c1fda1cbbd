//! # arbor-sections
//!
//! A flat, name-keyed façade for applications that think in users, groups
//! and sections rather than in graphs.
//!
//! There is no separate lookup table here: [`SectionDirectory`] lays the
//! flat model out as an arbor graph and asks the shared resolver. See the
//! [`directory`] module for the mapping.
//!
//! ```rust,ignore
//! use arbor_contracts::Permission;
//! use arbor_sections::SectionDirectory;
//!
//! let mut dir = SectionDirectory::new();
//! dir.add_section("billing")?;
//! dir.add_group("accountants")?;
//! dir.add_user("carol", &["accountants"])?;
//! dir.grant_group("accountants", "billing", &[Permission::Read, Permission::Update])?;
//! assert!(dir.can_update("carol", "billing")?);
//! ```

pub mod directory;

pub use directory::SectionDirectory;

#[cfg(test)]
mod tests {
    use arbor_contracts::{ArborError, GrantRule, Permission};
    use arbor_core::Authorizer;

    use crate::SectionDirectory;

    fn office() -> SectionDirectory {
        let mut dir = SectionDirectory::new();
        for section in ["billing", "reports", "wiki"] {
            dir.add_section(section).unwrap();
        }
        dir.add_group("accountants").unwrap();
        dir.add_group("auditors").unwrap();
        dir.add_user("carol", &["accountants"]).unwrap();
        dir.add_user("dave", &["auditors", "accountants"]).unwrap();
        dir.add_user("erin", &[]).unwrap();
        dir
    }

    fn crud(dir: &SectionDirectory, user: &str, section: &str) -> [bool; 4] {
        [
            dir.can_create(user, section).unwrap(),
            dir.can_read(user, section).unwrap(),
            dir.can_update(user, section).unwrap(),
            dir.can_delete(user, section).unwrap(),
        ]
    }

    // ── 1. baseline ───────────────────────────────────────────────────────────

    #[test]
    fn test_nothing_granted_denies() {
        let dir = office();
        assert_eq!(crud(&dir, "carol", "billing"), [false; 4]);
    }

    #[test]
    fn test_section_defaults_apply_to_every_user() {
        let mut dir = office();
        dir.set_section_defaults("wiki", &[Permission::Read]).unwrap();

        for user in ["carol", "dave", "erin"] {
            assert_eq!(crud(&dir, user, "wiki"), [false, true, false, false]);
        }
        assert_eq!(crud(&dir, "erin", "billing"), [false; 4]);
    }

    // ── 2. groups ─────────────────────────────────────────────────────────────

    #[test]
    fn test_group_grant_reaches_members() {
        let mut dir = office();
        dir.grant_group("accountants", "billing", &[Permission::Read, Permission::Update])
            .unwrap();

        assert_eq!(crud(&dir, "carol", "billing"), [false, true, true, false]);
        assert_eq!(crud(&dir, "dave", "billing"), [false, true, true, false]);
        assert_eq!(crud(&dir, "erin", "billing"), [false; 4]);
    }

    #[test]
    fn test_any_group_grants() {
        let mut dir = office();
        dir.grant_group("auditors", "reports", &[Permission::Read]).unwrap();
        dir.grant_group("accountants", "reports", &[Permission::Create]).unwrap();

        // auditors deny create, accountants grant it: any group wins.
        assert_eq!(crud(&dir, "dave", "reports"), [true, true, false, false]);
    }

    #[test]
    fn test_group_set_does_not_block_defaults() {
        let mut dir = office();
        dir.set_section_defaults("wiki", &[Permission::Read]).unwrap();
        dir.grant_group("accountants", "wiki", &[Permission::Update]).unwrap();

        assert_eq!(crud(&dir, "carol", "wiki"), [false, true, true, false]);
    }

    #[test]
    fn test_join_group_after_creation() {
        let mut dir = office();
        dir.grant_group("auditors", "reports", &[Permission::Read]).unwrap();
        assert!(!dir.can_read("carol", "reports").unwrap());

        dir.join_group("carol", "auditors").unwrap();
        assert!(dir.can_read("carol", "reports").unwrap());
    }

    // ── 3. personal sets and ownership ───────────────────────────────────────

    #[test]
    fn test_personal_set_is_authoritative() {
        let mut dir = office();
        dir.set_section_defaults("billing", &[Permission::Read]).unwrap();
        dir.grant_group("accountants", "billing", &[Permission::All]).unwrap();
        dir.grant_user("carol", "billing", &[Permission::Create]).unwrap();

        assert_eq!(crud(&dir, "carol", "billing"), [true, false, false, false]);
        assert_eq!(crud(&dir, "dave", "billing"), [true; 4]);
    }

    #[test]
    fn test_revoke_user_restores_group_grants() {
        let mut dir = office();
        dir.grant_group("accountants", "billing", &[Permission::Read]).unwrap();
        dir.grant_user("carol", "billing", &[]).unwrap();
        assert!(!dir.can_read("carol", "billing").unwrap());

        dir.revoke_user("carol", "billing").unwrap();
        assert!(dir.can_read("carol", "billing").unwrap());
    }

    #[test]
    fn test_owner_beats_personal_set() {
        let mut dir = office();
        dir.grant_user("erin", "reports", &[]).unwrap();
        dir.make_owner("erin", "reports").unwrap();

        assert_eq!(crud(&dir, "erin", "reports"), [true; 4]);

        let erin = dir.user_key("erin").unwrap();
        let reports = dir.section_key("reports").unwrap();
        let verdict = dir.access().explain(erin, reports, Permission::Delete);
        assert_eq!(verdict.grant().map(|g| g.rule), Some(GrantRule::Owner));
    }

    #[test]
    fn test_all_query_needs_a_complete_set() {
        let mut dir = office();
        dir.grant_user("carol", "billing", &Permission::ACTIONS).unwrap();
        dir.grant_user("erin", "billing", &[Permission::Read]).unwrap();

        assert!(dir.has_permission("carol", "billing", Permission::All).unwrap());
        assert!(!dir.has_permission("erin", "billing", Permission::All).unwrap());
    }

    // ── 4. errors ─────────────────────────────────────────────────────────────

    #[test]
    fn test_unknown_names() {
        let mut dir = office();
        assert!(matches!(
            dir.can_read("mallory", "billing"),
            Err(ArborError::UnknownEntity { .. })
        ));
        assert!(matches!(
            dir.can_read("carol", "payroll"),
            Err(ArborError::UnknownResource { .. })
        ));
        assert!(matches!(
            dir.add_user("frank", &["ghosts"]),
            Err(ArborError::UnknownEntity { .. })
        ));
        // A failed add_user leaves no trace.
        assert!(dir.user_key("frank").is_err());
    }

    #[test]
    fn test_duplicate_names() {
        let mut dir = office();
        assert!(matches!(
            dir.add_section("wiki"),
            Err(ArborError::DuplicateId { kind: "section", .. })
        ));
        assert!(matches!(
            dir.add_group("auditors"),
            Err(ArborError::DuplicateId { kind: "group", .. })
        ));
        assert!(matches!(
            dir.add_user("carol", &[]),
            Err(ArborError::DuplicateId { kind: "user", .. })
        ));
    }

    #[test]
    fn test_user_and_group_may_share_a_name() {
        let mut dir = office();
        dir.add_user("auditors", &["auditors"]).unwrap();
        dir.grant_group("auditors", "reports", &[Permission::Read]).unwrap();
        assert!(dir.can_read("auditors", "reports").unwrap());
    }
}
