//! Integration tests for the configuration resolution public API.

use chainrig::config::{resolve, EnvInput, EnvLayer, EnvLayerStack};
use chainrig::identity::{Identity, IdentitySource, ResolvedIdentity};
use chainrig::network::AccountsSource;
use chainrig::secrets::OutputMasker;
use chainrig::ui::MockReporter;

const TEST_PHRASE: &str = "test test test test test test test test test test test junk";
const FIRST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn env_with(vars: &[(&str, &str)]) -> EnvInput {
    let mut layer = EnvLayer::new("test");
    for (k, v) in vars {
        layer.set(*k, *v);
    }
    let mut stack = EnvLayerStack::new();
    stack.push(layer);
    EnvInput::from_stack(&stack)
}

#[test]
fn mnemonic_precedence_holds_for_any_private_key() {
    // The precedence law: a non-empty mnemonic wins no matter what the
    // private key variable holds.
    for key in ["", FIRST_KEY, "0xzz not even hex"] {
        let env = env_with(&[("MNEMONIC", TEST_PHRASE), ("PRIVATEKEY", key)]);
        let mut reporter = MockReporter::new();
        let config = resolve(&env, &mut reporter).unwrap();

        assert_eq!(config.identity.source, IdentitySource::Mnemonic);
        assert_eq!(
            config.networks["local"].accounts,
            AccountsSource::Phrase {
                mnemonic: TEST_PHRASE.to_string()
            }
        );
    }
}

#[test]
fn empty_mnemonic_with_key_uses_the_key_everywhere() {
    let env = env_with(&[("MNEMONIC", ""), ("PRIVATEKEY", FIRST_KEY)]);
    let mut reporter = MockReporter::new();
    let config = resolve(&env, &mut reporter).unwrap();

    assert_eq!(config.identity.source, IdentitySource::PrivateKey);
    let expected = AccountsSource::Keys(vec![FIRST_KEY.to_string()]);
    for name in ["local", "bsctest", "bsc", "sandbox"] {
        assert_eq!(config.networks[name].accounts, expected, "network {}", name);
    }
}

#[test]
fn both_empty_falls_back_to_random_identity() {
    let env = env_with(&[("MNEMONIC", ""), ("PRIVATEKEY", "")]);
    let mut reporter = MockReporter::new();
    let config = resolve(&env, &mut reporter).unwrap();

    assert_eq!(config.identity.source, IdentitySource::GeneratedFallback);
    assert!(reporter.warned_about("Random mnemonic in use"));

    // A second resolution yields a different identity.
    let again = resolve(&env, &mut reporter).unwrap();
    assert_ne!(config.identity.address, again.identity.address);
}

#[test]
fn unset_fork_provider_leaves_sandbox_fresh() {
    let env = env_with(&[("MNEMONIC", TEST_PHRASE)]);
    let mut reporter = MockReporter::new();
    let config = resolve(&env, &mut reporter).unwrap();

    assert_eq!(config.networks["sandbox"].fork, None);
    assert!(reporter.warned_about("CHAINSTACK_PROVIDER"));
}

#[test]
fn fork_provider_url_is_used_verbatim() {
    let env = env_with(&[
        ("MNEMONIC", TEST_PHRASE),
        ("CHAINSTACK_PROVIDER", "https://example.org/rpc"),
    ]);
    let mut reporter = MockReporter::new();
    let config = resolve(&env, &mut reporter).unwrap();

    assert_eq!(
        config.networks["sandbox"]
            .fork
            .as_ref()
            .map(|f| f.url.as_str()),
        Some("https://example.org/rpc")
    );
}

#[test]
fn always_exactly_four_profiles_with_fixed_chain_ids() {
    for vars in [
        vec![("MNEMONIC", TEST_PHRASE)],
        vec![("PRIVATEKEY", FIRST_KEY)],
        vec![
            ("MNEMONIC", TEST_PHRASE),
            ("CHAINSTACK_PROVIDER", "https://example.org/rpc"),
            ("REPORT_GAS", "1"),
        ],
    ] {
        let env = env_with(&vars);
        let mut reporter = MockReporter::new();
        let config = resolve(&env, &mut reporter).unwrap();

        assert_eq!(config.networks.len(), 4);
        assert_eq!(config.networks["bsctest"].chain_id, Some(97));
        assert_eq!(config.networks["bsc"].chain_id, Some(56));
    }
}

#[test]
fn auxiliary_settings_follow_the_environment() {
    let env = env_with(&[
        ("MNEMONIC", TEST_PHRASE),
        ("REPORT_GAS", "yes"),
        ("ETHERSCAN_API_KEY", "key-abc"),
    ]);
    let mut reporter = MockReporter::new();
    let config = resolve(&env, &mut reporter).unwrap();

    assert!(config.gas_report.enabled);
    assert_eq!(config.gas_report.currency, "USD");
    assert_eq!(config.verification.api_key.as_deref(), Some("key-abc"));
}

#[test]
fn identity_resolves_known_derivation_vector() {
    let mut reporter = MockReporter::new();
    let resolved = ResolvedIdentity::resolve(Some(TEST_PHRASE), None, &mut reporter).unwrap();
    let from_key = ResolvedIdentity::resolve(None, Some(FIRST_KEY), &mut reporter).unwrap();

    // The first derived account of the phrase and the raw first key
    // agree on the address; cross-tool BIP-44 compatibility.
    assert_eq!(resolved.address, from_key.address);
}

#[test]
fn serialized_config_can_be_fully_masked() {
    let env = env_with(&[("MNEMONIC", TEST_PHRASE)]);
    let mut reporter = MockReporter::new();
    let config = resolve(&env, &mut reporter).unwrap();

    let json = serde_json::to_string_pretty(&config).unwrap();
    assert!(json.contains(TEST_PHRASE));

    let masked = OutputMasker::for_identity(&config.identity.identity).mask(&json);
    assert!(!masked.contains(TEST_PHRASE));
    assert!(masked.contains("[REDACTED]"));
}

#[test]
fn sandbox_accounts_match_identity_form() {
    let env = env_with(&[("PRIVATEKEY", FIRST_KEY)]);
    let mut reporter = MockReporter::new();
    let config = resolve(&env, &mut reporter).unwrap();

    match &config.networks["sandbox"].accounts {
        AccountsSource::Keys(keys) => assert_eq!(keys, &vec![FIRST_KEY.to_string()]),
        AccountsSource::Phrase { .. } => panic!("sandbox should carry the raw key"),
    }
}

#[test]
fn identity_form_is_an_explicit_variant() {
    let mut reporter = MockReporter::new();
    let resolved = ResolvedIdentity::resolve(Some(TEST_PHRASE), None, &mut reporter).unwrap();

    match &resolved.identity {
        Identity::Mnemonic { phrase } => assert_eq!(phrase, TEST_PHRASE),
        Identity::SecretKey { .. } => panic!("phrase input must resolve to the mnemonic form"),
    }
}
