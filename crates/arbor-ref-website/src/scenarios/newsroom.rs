//! Scenario 1: Newsroom
//!
//! A small editorial team wired by hand through the core API:
//!
//! ```text
//! groups ─┬─ admins ───── admin        website ─┬─ news ── article-1
//!         └─ moderators ─ moderator             └─ forum
//! guest
//! ```
//!
//! Step A shows group inheritance and resource containment. Step B adds a
//! user-level deny on `news`, which binds `admin` on that node only. Step C
//! moves `article-1` into a new `archive` section, so grants on `news` no
//! longer reach it.

use arbor_contracts::{ArborResult, EntityKey, Permission, ResourceKey};
use arbor_core::AccessControl;

use crate::report::{crud_row, print_header, print_row};

// ── Fixture ───────────────────────────────────────────────────────────────────

struct Newsroom {
    access: AccessControl,
    admin: EntityKey,
    moderator: EntityKey,
    guest: EntityKey,
    website: ResourceKey,
    news: ResourceKey,
    forum: ResourceKey,
    article: ResourceKey,
}

fn build() -> Newsroom {
    let mut ac = AccessControl::new();

    let groups = ac.create_entity("groups");
    let admins = ac.create_child(groups, "admins");
    let moderators = ac.create_child(groups, "moderators");
    let admin = ac.create_child(admins, "admin");
    let moderator = ac.create_child(moderators, "moderator");
    let guest = ac.create_entity("guest");

    let website = ac.create_resource("website");
    let subs = ac.create_subs(website, ["news", "forum"]);
    let (news, forum) = (subs[0], subs[1]);
    let article = ac.create_sub(news, "article-1");

    ac.allow(admins, website, Permission::All);
    if let Some(m) = ac.entity_mut(moderators) {
        m.allow(forum, &[Permission::Create, Permission::Read, Permission::Update])
            .allow(news, &[Permission::Read]);
    }

    Newsroom {
        access: ac,
        admin,
        moderator,
        guest,
        website,
        news,
        forum,
        article,
    }
}

fn print_table(room: &Newsroom) {
    let users = [room.admin, room.moderator, room.guest];
    let resources = [room.website, room.news, room.forum, room.article];

    print_header();
    for user in users {
        for resource in resources {
            let (Some(e), Some(r)) = (room.access.entity(user), room.access.resource(resource))
            else {
                continue;
            };
            print_row(e.id(), r.id(), crud_row(&room.access, user, resource));
        }
    }
    println!();
}

// ── Scenario runner ───────────────────────────────────────────────────────────

/// Run Scenario 1: Newsroom.
pub fn run_scenario() -> ArborResult<()> {
    println!("=== Scenario 1: Newsroom ===");
    println!();

    let mut room = build();

    println!("  Step A: admins hold ALL on website; moderators hold C/R/U on forum and R on news");
    println!();
    print_table(&room);

    println!("  Step B: admin.deny(news, read)");
    room.access.deny(room.admin, room.news, Permission::Read);
    println!();
    print_table(&room);
    println!("  The deny binds admin on news only; article-1 is still readable through admins.");
    println!();

    println!("  Step C: move article-1 from news into a new archive section");
    let archive = room.access.create_sub(room.website, "archive");
    room.access.add_subs(archive, &[room.article]);
    println!(
        "  news/article-1:    {}",
        if room.access.get_sub(room.news, "article-1").is_some() { "present" } else { "gone" }
    );
    println!(
        "  archive/article-1: {}",
        if room.access.get_sub(archive, "article-1").is_some() { "present" } else { "gone" }
    );
    println!();
    print_table(&room);

    println!("  Scenario 1 complete.");
    println!();
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
