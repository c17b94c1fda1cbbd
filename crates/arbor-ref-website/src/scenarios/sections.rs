//! Scenario 3: Sections
//!
//! The flat model: named sections, groups and users with no hierarchy of
//! their own. Shows the precedence owner → personal set → any group →
//! section defaults → deny, all answered by the shared resolver.

use arbor_contracts::{ArborResult, Permission};
use arbor_sections::SectionDirectory;

use crate::report::{print_header, print_row};

const SECTIONS: [&str; 3] = ["blog", "shop", "admin"];
const USERS: [&str; 4] = ["ann", "ben", "cid", "dot"];

fn build() -> ArborResult<SectionDirectory> {
    let mut dir = SectionDirectory::new();
    for section in SECTIONS {
        dir.add_section(section)?;
    }
    dir.add_group("writers")?;
    dir.add_group("staff")?;

    dir.add_user("ann", &["writers"])?;
    dir.add_user("ben", &["staff", "writers"])?;
    dir.add_user("cid", &[])?;
    dir.add_user("dot", &["staff"])?;

    dir.set_section_defaults("blog", &[Permission::Read])?;
    dir.set_section_defaults("shop", &[Permission::Read])?;

    dir.grant_group("writers", "blog", &[Permission::Create, Permission::Read, Permission::Update])?;
    dir.grant_group("staff", "shop", &[Permission::All])?;
    dir.grant_group("staff", "admin", &[Permission::Read])?;

    // dot is staff but only trusted to read the shop.
    dir.grant_user("dot", "shop", &[Permission::Read])?;
    dir.make_owner("cid", "admin")?;

    Ok(dir)
}

fn crud(dir: &SectionDirectory, user: &str, section: &str) -> ArborResult<[bool; 4]> {
    Ok([
        dir.can_create(user, section)?,
        dir.can_read(user, section)?,
        dir.can_update(user, section)?,
        dir.can_delete(user, section)?,
    ])
}

// ── Scenario runner ───────────────────────────────────────────────────────────

/// Run Scenario 3: Sections.
pub fn run_scenario() -> ArborResult<()> {
    println!("=== Scenario 3: Sections ===");
    println!();
    println!("  Defaults:  blog R, shop R");
    println!("  writers:   blog C/R/U        staff: shop ALL, admin R");
    println!("  dot:       personal set on shop = R");
    println!("  cid:       owner of admin");
    println!();

    let dir = build()?;

    print_header();
    for user in USERS {
        for section in SECTIONS {
            print_row(user, section, crud(&dir, user, section)?);
        }
    }
    println!();

    println!("  Scenario 3 complete.");
    println!();
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
