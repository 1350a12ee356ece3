//! Property-based tests for core domain types.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use gitmini::cli::commands::resolve_with_fallback;
use gitmini::core::types::{Oid, RefKind, RefName};
use gitmini::git::{GitError, RefEntry};

/// Strategy for generating valid short-name characters.
fn short_name_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        Just('-'),
        Just('_'),
        Just('.'),
        Just('/'),
    ]
}

/// Strategy for generating short names git would accept under refs/heads/.
fn valid_short_name() -> impl Strategy<Value = String> {
    prop::collection::vec(short_name_char(), 1..40).prop_filter_map(
        "must be a valid ref component path",
        |chars| {
            let name: String = chars.into_iter().collect();
            if name.starts_with('/')
                || name.ends_with('/')
                || name.ends_with(".lock")
                || name.contains("..")
                || name.contains("//")
                || name
                    .split('/')
                    .any(|c| c.starts_with('.') || c.ends_with(".lock"))
            {
                None
            } else {
                Some(name)
            }
        },
    )
}

fn ref_kind() -> impl Strategy<Value = RefKind> {
    prop_oneof![Just(RefKind::Branches), Just(RefKind::Tags)]
}

fn any_oid() -> impl Strategy<Value = Oid> {
    "[0-9a-f]{40}".prop_map(|hex| Oid::new(hex).unwrap())
}

proptest! {
    #[test]
    fn short_name_recovers_input(kind in ref_kind(), short in valid_short_name()) {
        let name = RefName::within(kind, &short).unwrap();
        prop_assert_eq!(name.short_name(), short.as_str());
        prop_assert_eq!(name.kind(), Some(kind));
    }

    #[test]
    fn keyword_table_is_exact(word in "[a-z/-]{0,12}") {
        let expected = RefKind::ALL
            .into_iter()
            .find(|kind| kind.keywords().contains(&word.as_str()));
        prop_assert_eq!(RefKind::from_keyword(&word), expected);
    }

    #[test]
    fn branch_always_wins(
        short in valid_short_name(),
        branch_oid in any_oid(),
        tag_oid in any_oid(),
        has_branch in any::<bool>(),
        has_tag in any::<bool>(),
    ) {
        let lookup = |name: &RefName| -> Result<RefEntry, GitError> {
            let oid = match name.kind() {
                Some(RefKind::Branches) if has_branch => branch_oid.clone(),
                Some(RefKind::Tags) if has_tag => tag_oid.clone(),
                _ => {
                    return Err(GitError::RefNotFound {
                        refname: name.to_string(),
                    })
                }
            };
            Ok(RefEntry { name: name.clone(), oid })
        };

        let result = resolve_with_fallback(&short, lookup);
        match (has_branch, has_tag) {
            (true, _) => {
                let entry = result.unwrap();
                prop_assert_eq!(entry.name.kind(), Some(RefKind::Branches));
                prop_assert_eq!(entry.oid, branch_oid);
            }
            (false, true) => {
                let entry = result.unwrap();
                prop_assert_eq!(entry.name.kind(), Some(RefKind::Tags));
                prop_assert_eq!(entry.oid, tag_oid);
            }
            (false, false) => {
                let is_tag_error = matches!(
                    result,
                    Err(GitError::RefNotFound { ref refname }) if refname.starts_with("refs/tags/")
                );
                prop_assert!(is_tag_error);
            }
        }
    }
}
