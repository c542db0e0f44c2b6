//! Tests for command apply sequencing and payload shape

mod fixtures;

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;

use elytron_commands::commands::{
    AddConstantPermissionMapper, AddConstantPrincipalDecoder, AddConstantRealmMapper,
    AddConstantRoleMapper, AddLogicalRoleMapper, AddMappedRegexRealmMapper,
    AddSimpleRegexRealmMapper, AddSimpleRoleDecoder, LogicalOperation, Permission,
};
use elytron_commands::{CommandContext, CommandError, ManagementCommand, ServerVersion};

use fixtures::{RecordedCall, RecordingClient};

fn context(client: &Arc<RecordingClient>, version: ServerVersion) -> CommandContext {
    CommandContext::new(client.clone(), version)
}

/// Given a mapper without replace-existing
/// Then exactly one add is submitted and omitted optionals never appear
#[tokio::test]
async fn test_simple_regex_realm_mapper_single_add() {
    let client = Arc::new(RecordingClient::new());
    let ctx = context(&client, ServerVersion::VERSION_5_0_0);

    AddSimpleRegexRealmMapper::builder("r1")
        .pattern("^a.*$")
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![RecordedCall::Add {
            address: "/subsystem=elytron/simple-regex-realm-mapper=r1".to_string(),
            payload: json!({"pattern": "^a.*$"}),
        }]
    );
}

/// Given replace-existing
/// Then remove runs before add with exactly one reload in between
#[tokio::test]
async fn test_replace_existing_orders_remove_reload_add() {
    let client = Arc::new(RecordingClient::with_existing([
        "/subsystem=elytron/simple-regex-realm-mapper=r1",
    ]));
    let ctx = context(&client, ServerVersion::VERSION_5_0_0);

    AddSimpleRegexRealmMapper::builder("r1")
        .pattern(".*")
        .delegate_realm_mapper("fallback")
        .replace_existing()
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![
            RecordedCall::RemoveIfExists {
                address: "/subsystem=elytron/simple-regex-realm-mapper=r1".to_string(),
            },
            RecordedCall::ReloadIfRequired,
            RecordedCall::Add {
                address: "/subsystem=elytron/simple-regex-realm-mapper=r1".to_string(),
                payload: json!({"pattern": ".*", "delegate-realm-mapper": "fallback"}),
            },
        ]
    );
}

/// Given replace-existing against a server with no such resource
/// Then the sequence is unchanged; absence is not an error
#[tokio::test]
async fn test_replace_existing_tolerates_absent_resource() {
    let client = Arc::new(RecordingClient::new());
    let ctx = context(&client, ServerVersion::VERSION_5_0_0);

    AddConstantRealmMapper::builder("local")
        .realm_name("ApplicationRealm")
        .replace_existing()
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap();

    let calls = client.calls();
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[0], RecordedCall::RemoveIfExists { .. }));
    assert!(matches!(calls[1], RecordedCall::ReloadIfRequired));
    assert!(matches!(calls[2], RecordedCall::Add { .. }));
}

/// Given a server older than the elytron subsystem
/// Then apply fails before any client call
#[tokio::test]
async fn test_version_gate_short_circuits_before_client_calls() {
    let client = Arc::new(RecordingClient::new());
    let ctx = context(&client, ServerVersion::VERSION_4_1_0);

    let err = AddSimpleRegexRealmMapper::builder("r1")
        .pattern(".*")
        .replace_existing()
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap_err();

    assert!(matches!(err, CommandError::UnsupportedVersion { .. }));
    assert!(client.calls().is_empty());
}

/// Given permission-set references on a server predating them
/// Then apply fails before any client call
#[tokio::test]
async fn test_permission_sets_version_gate() {
    let client = Arc::new(RecordingClient::new());
    let ctx = context(&client, ServerVersion::VERSION_6_0_0);

    let err = AddConstantPermissionMapper::builder("p1")
        .add_permission_sets(["login-permission-set"])
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap_err();

    match err {
        CommandError::UnsupportedVersion { required, .. } => {
            assert_eq!(required, ServerVersion::VERSION_7_0_0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_permission_sets_payload_shape() {
    let client = Arc::new(RecordingClient::new());
    let ctx = context(&client, ServerVersion::VERSION_7_0_0);

    AddConstantPermissionMapper::builder("p1")
        .add_permission_sets(["set1", "set2"])
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![RecordedCall::Add {
            address: "/subsystem=elytron/constant-permission-mapper=p1".to_string(),
            payload: json!({
                "permission-sets": [
                    {"permission-set": "set1"},
                    {"permission-set": "set2"},
                ]
            }),
        }]
    );
}

/// Inline permissions serialize as nested objects with unset optionals
/// omitted; permissions without either group submit an empty payload
#[tokio::test]
async fn test_inline_permissions_payload_shape() {
    let client = Arc::new(RecordingClient::new());
    let ctx = context(&client, ServerVersion::VERSION_5_0_0);

    let login = Permission::builder("org.wildfly.security.auth.permission.LoginPermission")
        .build()
        .unwrap();
    let files = Permission::builder("java.io.FilePermission")
        .target_name("/tmp/*")
        .action("read")
        .build()
        .unwrap();

    AddConstantPermissionMapper::builder("p1")
        .add_permissions([login, files])
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![RecordedCall::Add {
            address: "/subsystem=elytron/constant-permission-mapper=p1".to_string(),
            payload: json!({
                "permissions": [
                    {"class-name": "org.wildfly.security.auth.permission.LoginPermission"},
                    {
                        "class-name": "java.io.FilePermission",
                        "target-name": "/tmp/*",
                        "action": "read",
                    },
                ]
            }),
        }]
    );
}

#[tokio::test]
async fn test_empty_permission_mapper_submits_empty_payload() {
    let client = Arc::new(RecordingClient::new());
    let ctx = context(&client, ServerVersion::VERSION_5_0_0);

    AddConstantPermissionMapper::builder("p1")
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![RecordedCall::Add {
            address: "/subsystem=elytron/constant-permission-mapper=p1".to_string(),
            payload: json!({}),
        }]
    );
}

/// A failed add propagates unmodified, with the remove already done and no
/// compensating action
#[tokio::test]
async fn test_delegated_failure_propagates_unmodified() {
    let client = Arc::new(RecordingClient::failing_add("WFLYCTL0212: duplicate resource"));
    let ctx = context(&client, ServerVersion::VERSION_5_0_0);

    let err = AddSimpleRoleDecoder::builder("d1")
        .attribute("Roles")
        .replace_existing()
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "management operation failed: WFLYCTL0212: duplicate resource"
    );
    // remove and reload already happened; nothing rolls them back
    let calls = client.calls();
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[2], RecordedCall::Add { .. }));
}

#[tokio::test]
async fn test_mapped_regex_realm_mapper_payload_shape() {
    let client = Arc::new(RecordingClient::new());
    let ctx = context(&client, ServerVersion::VERSION_5_0_0);

    AddMappedRegexRealmMapper::builder("m1")
        .pattern("^(.*)@")
        .add_realm_mapping("internal", "LdapRealm")
        .add_realm_mapping("external", "TokenRealm")
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![RecordedCall::Add {
            address: "/subsystem=elytron/mapped-regex-realm-mapper=m1".to_string(),
            payload: json!({
                "pattern": "^(.*)@",
                "realm-map": {
                    "internal": "LdapRealm",
                    "external": "TokenRealm",
                },
            }),
        }]
    );
}

#[tokio::test]
async fn test_constant_role_mapper_payload_shape() {
    let client = Arc::new(RecordingClient::new());
    let ctx = context(&client, ServerVersion::VERSION_5_0_0);

    AddConstantRoleMapper::builder("rm1")
        .add_roles(["admin", "operator"])
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![RecordedCall::Add {
            address: "/subsystem=elytron/constant-role-mapper=rm1".to_string(),
            payload: json!({"roles": ["admin", "operator"]}),
        }]
    );
}

/// Unset sides of a logical role mapper never appear in the payload
#[tokio::test]
async fn test_logical_role_mapper_omits_unset_sides() {
    let client = Arc::new(RecordingClient::new());
    let ctx = context(&client, ServerVersion::VERSION_5_0_0);

    AddLogicalRoleMapper::builder("combined")
        .logical_operation(LogicalOperation::Minus)
        .left("all-roles")
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![RecordedCall::Add {
            address: "/subsystem=elytron/logical-role-mapper=combined".to_string(),
            payload: json!({"logical-operation": "minus", "left": "all-roles"}),
        }]
    );
}

#[tokio::test]
async fn test_constant_principal_decoder_payload_shape() {
    let client = Arc::new(RecordingClient::new());
    let ctx = context(&client, ServerVersion::VERSION_10_0_0);

    AddConstantPrincipalDecoder::builder("d1")
        .constant("anonymous")
        .build()
        .unwrap()
        .apply(&ctx)
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![RecordedCall::Add {
            address: "/subsystem=elytron/constant-principal-decoder=d1".to_string(),
            payload: json!({"constant": "anonymous"}),
        }]
    );
}
