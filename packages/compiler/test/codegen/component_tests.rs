/**
 * Component Assembler Tests
 *
 * Splicing generated members into the user's component class, preamble
 * generation and the missing-class diagnostic.
 */

#[path = "../util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::counter_template;
    use template_emitter::codegen::emit_component;
    use template_emitter::info::{ComponentRef, ElementInfo};
    use template_emitter::{
        compile_units, emit_unit, ComponentUnit, Diagnostic, Element, EmitterConfig, Severity,
        TracingSink, Unit,
    };
    use tracing_subscriber::EnvFilter;

    const COUNTER_CODE: &str = "import 'package:web_components/web_component.dart';\n\
                                \n\
                                class XCounter extends WebComponent {\n  \
                                int count = 0;\n  \
                                void inc() { count++; }\n\
                                }\n";

    fn quiet_config() -> EmitterConfig {
        EmitterConfig {
            emit_header: false,
            ..EmitterConfig::default()
        }
    }

    fn hello_unit() -> ComponentUnit {
        let template = Element::new("template").with_child(
            Element::new("p").with_info(
                ElementInfo::new()
                    .with_field("__e0", "__e-0")
                    .with_content_binding("greeting", "__stop1"),
            ),
        );
        ComponentUnit::new(
            "x-hello.html",
            "XHello",
            "class XHello extends WebComponent {\n  String greeting = 'hi';\n}\n",
            template,
        )
    }

    fn emit(unit: &ComponentUnit, config: &EmitterConfig) -> (String, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let code = emit_component(unit, config, &mut diagnostics).unwrap();
        (code, diagnostics)
    }

    #[test]
    fn should_splice_lifecycle_members_into_class() {
        let (code, diagnostics) = emit(&hello_unit(), &quiet_config());
        assert!(diagnostics.is_empty());
        assert_eq!(
            code,
            "library x_hello;\n\
             \n\
             import 'dart:html' as autogenerated;\n\
             import 'package:web_components/watcher.dart' as autogenerated;\n\
             \n\
             class XHello extends WebComponent {\n  \
             // Generated from the template.\n  \
             autogenerated.ParagraphElement __e0;\n  \
             autogenerated.WatcherDisposer __stop1;\n  \
             void created_autogenerated() {\n    \
             var _root = this;\n    \
             __e0 = _root.query('#__e-0');\n  \
             }\n  \
             void inserted_autogenerated() {\n    \
             __stop1 = autogenerated.watchAndInvoke(() => greeting, (e) {\n      \
             __e0.innerHTML = autogenerated.htmlEscape('${e.newValue}');\n    \
             });\n  \
             }\n  \
             void removed_autogenerated() {\n    \
             __stop1();\n  \
             }\n\
             \n  \
             String greeting = 'hi';\n\
             }\n"
        );
    }

    #[test]
    fn should_keep_user_code_around_generated_members() {
        let unit = ComponentUnit::new("x-counter.html", "XCounter", COUNTER_CODE, counter_template());
        let (code, _) = emit(&unit, &EmitterConfig::default());

        assert!(code.starts_with("// Auto-generated from x-counter.html.\n// DO NOT EDIT.\n\nlibrary x_counter;\n"));
        let user_import = code
            .find("import 'package:web_components/web_component.dart';")
            .unwrap();
        let class_open = code.find("class XCounter extends WebComponent {\n").unwrap();
        let generated = code.find("// Generated from the template.").unwrap();
        let removed = code.find("void removed_autogenerated() {").unwrap();
        let user_field = code.find("int count = 0;").unwrap();
        assert!(code.find("import 'dart:html' as autogenerated;").unwrap() < user_import);
        assert!(user_import < class_open && class_open < generated);
        assert!(generated < removed && removed < user_field);
        assert!(code.ends_with("void inc() { count++; }\n}\n"));
    }

    #[test]
    fn should_report_missing_class_and_return_user_code() {
        let unit = ComponentUnit::new("x-counter.html", "XCounter", "void main() {}\n", counter_template());
        let (code, diagnostics) = emit(&unit, &quiet_config());

        assert_eq!(code, "void main() {}\n");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
        assert_eq!(diagnostics[0].file.as_deref(), Some("x-counter.html"));
        assert!(diagnostics[0]
            .message
            .starts_with("please provide a class definition for XCounter:"));
    }

    #[test]
    fn should_log_diagnostics_through_tracing_sink() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("template_emitter=debug"))
            .with_test_writer()
            .try_init();
        let unit = ComponentUnit::new("x-counter.html", "XCounter", "", counter_template());
        let code = emit_component(&unit, &quiet_config(), &mut TracingSink).unwrap();
        assert_eq!(code, "");
    }

    #[test]
    fn should_not_match_class_with_longer_name() {
        let code = "class XCounterBase extends WebComponent {\n}\n";
        let unit = ComponentUnit::new("x-counter.html", "XCounter", code, counter_template());
        let (out, diagnostics) = emit(&unit, &quiet_config());
        assert_eq!(out, code);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn should_preserve_user_library_directive() {
        let mut unit = hello_unit();
        unit.user_code =
            "library hello.app;\n\nclass XHello extends WebComponent {\n}\n".to_string();
        let (code, _) = emit(&unit, &quiet_config());

        assert!(code.starts_with("library hello.app;\n\nimport 'dart:html' as autogenerated;\n"));
        assert_eq!(code.matches("library ").count(), 1);
        assert!(!code.contains("library x_hello;"));
    }

    #[test]
    fn should_root_into_shadow_dom_with_inline_markup() {
        let mut unit = ComponentUnit::new("x-counter.html", "XCounter", COUNTER_CODE, counter_template());
        unit.shadow_dom = true;
        unit.inline_markup = true;
        let (code, _) = emit(&unit, &quiet_config());

        let root = code.find("var _root = createShadowRoot();").unwrap();
        let markup = code
            .find("_root.innerHTML = '<button id=\"__e-0\">Click</button><span id=\"__e-1\"></span>';")
            .unwrap();
        let lookup = code.find("__e0 = _root.query('#__e-0');").unwrap();
        assert!(root < markup && markup < lookup);
        assert!(!code.contains("var _root = this;"));
    }

    #[test]
    fn should_warn_when_shadow_root_starts_empty() {
        let mut unit = ComponentUnit::new("x-counter.html", "XCounter", COUNTER_CODE, counter_template());
        unit.shadow_dom = true;
        let (code, diagnostics) = emit(&unit, &quiet_config());

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(!diagnostics[0].is_error());
        assert!(diagnostics[0].message.contains("empty shadow root"));
        assert!(code.contains("var _root = createShadowRoot();"));
        assert!(code.contains("void created_autogenerated() {"));
    }

    #[test]
    fn should_skip_class_declarations_in_comments_and_strings() {
        let user_code = "// class XCounter { old }\n\
                         const doc = 'class XCounter { }';\n\
                         /* class XCounter {\n} */\n\
                         @CustomTag('x-counter') class XCounter extends WebComponent {\n\
                         }\n";
        let unit = ComponentUnit::new("x-counter.html", "XCounter", user_code, counter_template());
        let (code, diagnostics) = emit(&unit, &quiet_config());

        assert!(diagnostics.is_empty());
        assert_eq!(code.matches("// Generated from the template.").count(), 1);
        let doc = code.find("const doc = 'class XCounter { }';").unwrap();
        let real = code
            .find("@CustomTag('x-counter') class XCounter extends WebComponent {\n  // Generated from the template.")
            .unwrap();
        assert!(doc < real);
        assert!(code.contains("// class XCounter { old }\n"));
    }

    #[test]
    fn should_import_each_referenced_component_once() {
        let item = ComponentRef::new("XItem", "x-item.dart");
        let template = Element::new("template")
            .with_child(
                Element::new("x-item")
                    .with_info(ElementInfo::new().with_field("__e0", "a").with_component(item.clone())),
            )
            .with_child(
                Element::new("x-item")
                    .with_info(ElementInfo::new().with_field("__e1", "b").with_component(item.clone())),
            );
        let mut unit = ComponentUnit::new(
            "x-list.html",
            "XList",
            "class XList extends WebComponent {}\n",
            template,
        );
        unit.references = vec![item.clone(), item];
        let (code, _) = emit(&unit, &quiet_config());

        assert_eq!(code.matches("import 'x-item.dart';").count(), 1);
        assert_eq!(code.matches("new XItem.forElement(").count(), 2);
    }

    #[test]
    fn should_emit_unit_decoded_from_json() {
        let json = r#"{
            "kind": "component",
            "fileName": "x-hello.html",
            "constructor": "XHello",
            "userCode": "class XHello extends WebComponent {\n}\n",
            "template": {
                "name": "template",
                "children": [
                    {
                        "type": "element",
                        "name": "p",
                        "info": {
                            "identifier": "__e0",
                            "elementId": "__e-0",
                            "contentBinding": { "expression": "greeting", "stopper": "__stop1" }
                        }
                    }
                ]
            }
        }"#;
        let unit = Unit::from_json(json).unwrap();
        assert_eq!(unit.file_name(), "x-hello.html");

        let output = emit_unit(&unit, &EmitterConfig::default()).unwrap();
        assert!(!output.has_errors());
        assert!(output
            .code
            .contains("__stop1 = autogenerated.watchAndInvoke(() => greeting, (e) {"));
    }

    #[test]
    fn should_compile_units_in_input_order() {
        let mut broken = hello_unit();
        broken.file_name = "x-broken.html".to_string();
        broken.user_code = "// no class here\n".to_string();
        let units = vec![Unit::Component(hello_unit()), Unit::Component(broken)];

        let results = compile_units(&units, &quiet_config());
        assert_eq!(results.len(), 2);

        let first = results[0].as_ref().unwrap();
        assert_eq!(first.file_name, "x-hello.html");
        assert!(!first.has_errors());

        let second = results[1].as_ref().unwrap();
        assert_eq!(second.file_name, "x-broken.html");
        assert!(second.has_errors());
        assert_eq!(second.code, "// no class here\n");
    }

    #[test]
    fn should_propagate_structural_errors() {
        let template = Element::new("template").with_child(
            Element::new("p").with_info(ElementInfo::new().with_content_binding("x", "__stop1")),
        );
        let unit = ComponentUnit::new("x.html", "X", "class X {}\n", template);
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        assert!(emit_component(&unit, &quiet_config(), &mut diagnostics).is_err());
    }
}
