// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use contract_schema::identity::{build_global_id, resolve_global_id};
use contract_schema::{GlobalId, GlobalIdError};
use proptest::prelude::*;

fn is_malformed(result: Result<(String, String), GlobalIdError>) -> bool {
    matches!(result, Err(GlobalIdError::MalformedGlobalId { .. }))
}

proptest! {
    #[test]
    fn build_then_resolve_round_trips(
        type_name in "[A-Za-z_][A-Za-z0-9_]{0,24}",
        local_id in ".{1,40}",
    ) {
        let token = build_global_id(&type_name, &local_id);
        prop_assert_eq!(resolve_global_id(&token), Ok((type_name, local_id)));
    }

    #[test]
    fn tokens_use_only_the_url_safe_alphabet(
        type_name in "[A-Za-z_][A-Za-z0-9_]{0,24}",
        local_id in ".{1,40}",
    ) {
        let token = GlobalId::new(type_name, local_id).encode();
        prop_assert!(token.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
    }

    #[test]
    fn wrong_separator_is_malformed(
        type_name in "[A-Za-z_][A-Za-z0-9_]{0,24}",
        sep in prop::sample::select(vec![';', '/', '|', '-', ' ']),
        local_id in "[a-z0-9]{1,12}",
    ) {
        let token = contract_schema_token(&format!("{type_name}{sep}{local_id}"));
        prop_assert!(is_malformed(resolve_global_id(&token)));
    }

    #[test]
    fn truncated_before_local_id_is_malformed(
        type_name in "[A-Za-z_][A-Za-z0-9_]{0,24}",
        keep_separator in any::<bool>(),
    ) {
        let raw = if keep_separator { format!("{type_name}:") } else { type_name };
        prop_assert!(is_malformed(resolve_global_id(&contract_schema_token(&raw))));
    }

    #[test]
    fn non_alphabet_bytes_are_malformed(
        type_name in "[A-Za-z_][A-Za-z0-9_]{0,24}",
        local_id in "[a-z0-9]{1,12}",
        junk in prop::sample::select(vec!['!', '=', '+', '/', '.', '~']),
        at in any::<prop::sample::Index>(),
    ) {
        let token = build_global_id(&type_name, &local_id);
        let cut = at.index(token.len() + 1);
        let mut bad = token[..cut].to_owned();
        bad.push(junk);
        bad.push_str(&token[cut..]);
        prop_assert!(is_malformed(resolve_global_id(&bad)));
    }
}

/// Encodes raw text the same way global ids are encoded, without the
/// structural guarantees.
fn contract_schema_token(raw: &str) -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;
    URL_SAFE_NO_PAD.encode(raw)
}
