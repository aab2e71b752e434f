mod common;

use common::{calculator, squash, Model};
use soapstub_codegen::{AddressingPolicy, GeneratorConfig, ServiceModuleWriter};
use tracing_test::traced_test;

fn source(model: &Model, config: GeneratorConfig) -> String {
    let mut writer = ServiceModuleWriter::new(config);
    writer
        .from_definition(&model.definition, &model.namespaces)
        .unwrap();
    squash(&writer.to_source().unwrap())
}

#[test]
fn authorization_hook_follows_the_constructor() {
    let source = source(
        &calculator(),
        GeneratorConfig::default().with_authorization(true),
    );

    assert!(source.contains("ServiceConfig,AuthInfo"));
    assert!(source.contains(
        "pubstructCalculator<I>{base:ServiceSoapBinding,implementation:Option<I>,auth_method_name:Option<String>,}"
    ));
    assert!(source.contains("auth_method_name:config.auth_method_name"));
    assert!(source.contains(
        "pubfnauthorize(&self,auth_info:&AuthInfo,post:&str,action:&str)->Result<bool,Fault>"
    ));
    assert!(source.contains("ifimplementation.exposes(name){returnimplementation.invoke(name,(auth_info,post,action));}"));
    assert!(source.contains("Ok(true)"));

    let position = |needle: &str| source.find(needle).unwrap();
    assert!(position("pubfnnew") < position("pubfnauthorize"));
    assert!(position("pubfnauthorize") < position("pubfnsoap_Add"));
}

#[test]
fn authorization_composes_with_addressing() {
    let source = source(
        &calculator(),
        GeneratorConfig::default()
            .with_addressing(AddressingPolicy::Lenient)
            .with_authorization(true),
    );

    assert!(source.contains("Address,AuthInfo"));
    assert!(source.contains("base:SimpleWsResource"));
    assert!(source.contains("pubfnauthorize("));
    assert!(source.contains("pubfnwsa_Add(&self,ps:&ParsedSoap,address:&Address)"));
}

#[test]
fn every_service_gets_its_own_hook() {
    let mut model = calculator();
    model.add_service("Backup", "BackupSoap", None);

    let source = source(&model, GeneratorConfig::default().with_authorization(true));
    assert_eq!(source.matches("pubfnauthorize(").count(), 2);
    assert_eq!(source.matches("AuthInfo").count(), 3);
}

#[traced_test]
#[test]
fn diagnostics_are_logged() {
    let mut model = calculator();
    model
        .add_operation("Reset", None, Some("AddSoapOut"))
        .bind("Reset", None);

    source(&model, GeneratorConfig::default());
    assert!(logs_contain("missing soapAction"));
    assert!(logs_contain("generated service module"));
}
