//! Integration tests for the tree / member repositories.
//!
//! Exercises the repository layer against a real database to verify that:
//! - A tree's `member_ids` always mirrors the members' own `tree_id`
//! - Deleting a member detaches it from its tree
//! - Deleting a tree cascades to its members
//! - Members are listed in a stable order
//! - Patch updates only touch the supplied fields

use famtree_core::types::CalendarDate;
use famtree_db::models::member::{CreateMember, UpdateMember};
use famtree_db::models::tree::{CreateTree, UpdateTree};
use famtree_db::models::user::CreateUser;
use famtree_db::repositories::{MemberRepo, TreeRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_owner(pool: &PgPool, email: &str) -> i64 {
    let input = CreateUser {
        name: "Owner".to_string(),
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
        .id
}

fn new_tree(owner_id: i64, name: &str) -> CreateTree {
    CreateTree {
        owner_id,
        name: name.to_string(),
        description: None,
        is_public: false,
        memory_notes: Some("owner eyes only".to_string()),
    }
}

fn new_member(tree_id: i64, name: &str, relation: &str) -> CreateMember {
    CreateMember {
        tree_id,
        name: name.to_string(),
        relation: relation.to_string(),
        birth_date: None,
        death_date: None,
        email: None,
        phone: None,
        bio: None,
        profile_photo_url: None,
        memory_notes: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_new_tree_has_no_members(pool: PgPool) {
    let owner = create_owner(&pool, "empty@test.com").await;
    let tree = TreeRepo::create(&pool, &new_tree(owner, "Empty"))
        .await
        .unwrap();

    assert_eq!(tree.owner_id, owner);
    assert!(!tree.is_public);
    assert!(tree.member_ids.is_empty());
    assert_eq!(MemberRepo::count_by_tree(&pool, tree.id).await.unwrap(), 0);
}

#[sqlx::test]
async fn test_member_ids_follow_member_rows(pool: PgPool) {
    let owner = create_owner(&pool, "ids@test.com").await;
    let tree = TreeRepo::create(&pool, &new_tree(owner, "Smiths"))
        .await
        .unwrap();

    let father = MemberRepo::create(&pool, &new_member(tree.id, "John", "Father"))
        .await
        .unwrap();
    let son = MemberRepo::create(&pool, &new_member(tree.id, "Jack", "Son"))
        .await
        .unwrap();

    let tree = TreeRepo::find_by_id(&pool, tree.id).await.unwrap().unwrap();
    assert_eq!(tree.member_ids, vec![father.id, son.id]);

    assert!(MemberRepo::delete(&pool, father.id).await.unwrap());

    let tree = TreeRepo::find_by_id(&pool, tree.id).await.unwrap().unwrap();
    assert_eq!(tree.member_ids, vec![son.id]);
    assert!(!MemberRepo::delete(&pool, father.id).await.unwrap());
}

#[sqlx::test]
async fn test_list_by_tree_is_scoped_and_ordered(pool: PgPool) {
    let owner = create_owner(&pool, "order@test.com").await;
    let a = TreeRepo::create(&pool, &new_tree(owner, "A")).await.unwrap();
    let b = TreeRepo::create(&pool, &new_tree(owner, "B")).await.unwrap();

    for name in ["One", "Two", "Three"] {
        MemberRepo::create(&pool, &new_member(a.id, name, "Cousin"))
            .await
            .unwrap();
    }
    MemberRepo::create(&pool, &new_member(b.id, "Elsewhere", "Aunt"))
        .await
        .unwrap();

    let first = MemberRepo::list_by_tree(&pool, a.id).await.unwrap();
    let second = MemberRepo::list_by_tree(&pool, a.id).await.unwrap();

    let names: Vec<&str> = first.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["One", "Two", "Three"]);
    let ids: Vec<i64> = second.iter().map(|m| m.id).collect();
    assert_eq!(ids, first.iter().map(|m| m.id).collect::<Vec<_>>());
}

#[sqlx::test]
async fn test_delete_tree_cascades_members(pool: PgPool) {
    let owner = create_owner(&pool, "cascade@test.com").await;
    let tree = TreeRepo::create(&pool, &new_tree(owner, "Gone"))
        .await
        .unwrap();
    let member = MemberRepo::create(&pool, &new_member(tree.id, "Ann", "Mother"))
        .await
        .unwrap();

    assert!(TreeRepo::delete(&pool, tree.id).await.unwrap());

    assert!(TreeRepo::find_by_id(&pool, tree.id).await.unwrap().is_none());
    assert!(MemberRepo::find_by_id(&pool, member.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn test_update_member_patches_only_given_fields(pool: PgPool) {
    let owner = create_owner(&pool, "patch@test.com").await;
    let tree = TreeRepo::create(&pool, &new_tree(owner, "Patch"))
        .await
        .unwrap();
    let mut input = new_member(tree.id, "Ann", "Mother");
    input.bio = Some("Gardener".to_string());
    let member = MemberRepo::create(&pool, &input).await.unwrap();

    let update = UpdateMember {
        relation: Some("Grandparent".to_string()),
        birth_date: CalendarDate::from_ymd_opt(1940, 3, 9),
        ..Default::default()
    };
    let updated = MemberRepo::update(&pool, member.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Ann");
    assert_eq!(updated.relation, "Grandparent");
    assert_eq!(updated.bio.as_deref(), Some("Gardener"));
    assert_eq!(updated.birth_date, CalendarDate::from_ymd_opt(1940, 3, 9));
    assert!(updated.updated_at >= member.updated_at);

    let missing = MemberRepo::update(&pool, 999_999, &update).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_life_span_check_constraint(pool: PgPool) {
    let owner = create_owner(&pool, "span@test.com").await;
    let tree = TreeRepo::create(&pool, &new_tree(owner, "Span"))
        .await
        .unwrap();
    let mut input = new_member(tree.id, "Ann", "Mother");
    input.birth_date = CalendarDate::from_ymd_opt(1990, 1, 1);
    input.death_date = CalendarDate::from_ymd_opt(1980, 1, 1);

    let result = MemberRepo::create(&pool, &input).await;
    assert!(result.is_err(), "death before birth must be rejected");
}

#[sqlx::test]
async fn test_tree_update_and_owner_listing(pool: PgPool) {
    let owner = create_owner(&pool, "list@test.com").await;
    let other = create_owner(&pool, "other@test.com").await;
    let tree = TreeRepo::create(&pool, &new_tree(owner, "Mine"))
        .await
        .unwrap();
    TreeRepo::create(&pool, &new_tree(other, "Theirs"))
        .await
        .unwrap();

    let update = UpdateTree {
        is_public: Some(true),
        ..Default::default()
    };
    let updated = TreeRepo::update(&pool, tree.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.is_public);
    assert_eq!(updated.name, "Mine");
    assert_eq!(updated.memory_notes.as_deref(), Some("owner eyes only"));

    let mine = TreeRepo::list_by_owner(&pool, owner).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, tree.id);
}

#[sqlx::test]
async fn test_duplicate_email_rejected(pool: PgPool) {
    create_owner(&pool, "dup@test.com").await;
    let input = CreateUser {
        name: "Second".to_string(),
        email: "dup@test.com".to_string(),
        password_hash: "x".to_string(),
    };
    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    let constraint = err
        .as_database_error()
        .and_then(|e| e.constraint())
        .map(str::to_string);
    assert_eq!(constraint.as_deref(), Some("uq_users_email"));
}
