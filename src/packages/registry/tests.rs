use super::*;
use crate::packages::testing::FakeManager;

fn fake_registry() -> ManagerRegistry {
    let mut registry = ManagerRegistry::new();
    registry.register(Box::new(FakeManager::new(Manager::Npm)));
    registry.register(Box::new(FakeManager::unavailable(Manager::Pip)));
    registry
}

#[test]
fn test_registry_registration_order() {
    let registry = fake_registry();
    assert_eq!(registry.registered(), vec![Manager::Npm, Manager::Pip]);
}

#[test]
fn test_register_replaces_same_manager() {
    let mut registry = fake_registry();
    registry.register(Box::new(FakeManager::new(Manager::Pip)));

    assert_eq!(registry.registered(), vec![Manager::Npm, Manager::Pip]);
    assert!(registry.require(Manager::Pip).is_ok());
}

#[test]
fn test_require_rejects_unavailable_manager() {
    let registry = fake_registry();

    assert!(registry.require(Manager::Npm).is_ok());
    assert!(matches!(
        registry.require(Manager::Pip),
        Err(UnifiedError::ManagerUnavailable {
            manager: Manager::Pip
        })
    ));
}

#[test]
fn test_select_auto_returns_every_manager() {
    let registry = fake_registry();

    let selected = registry.select(ManagerChoice::Auto).expect("auto select");
    assert_eq!(selected.len(), 2);

    let forced = registry.select(ManagerChoice::Npm).expect("forced select");
    assert_eq!(forced.len(), 1);
    assert_eq!(forced[0].manager(), Manager::Npm);

    assert!(registry.select(ManagerChoice::Pip).is_err());
}

#[test]
fn test_describe_names_every_manager() {
    assert_eq!(fake_registry().describe(), "npm or pip3");
    assert_eq!(ManagerRegistry::new().describe(), "any package manager");
}

#[test]
fn test_default_config_registers_npm_and_pip() {
    let registry = ManagerRegistry::from_config(&RegistryConfig::default()).expect("registry");
    assert_eq!(registry.registered(), Manager::ALL.to_vec());
}
