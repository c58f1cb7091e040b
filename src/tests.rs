use crate::catalog::Catalog;
use crate::codegen::{generate, CodegenOptions};
use crate::sequence::{StatementList, StatementPatch};
use crate::statement::{ControlSpec, StatementId};
use crate::validate::Validator;

const PREAMBLE: &str = concat!(
    "-- Generated Lua Script\n",
    "-- Created with ME-Gui\n",
    "\n",
    "local API = require(\"api\")\n",
    "\n",
    "-- Variable declarations\n",
    "local CurrentTick = API.Get_tick()\n",
    "local OBJECTS_table = API.ReadAllObjectsArray({-1},{-1},{})\n",
    "\n",
);

const LOOP_OPEN: &str = concat!(
    "-- Main execution loop\n",
    "while API.Read_LoopyLoop() do\n",
    "  -- Update game state\n",
    "  CurrentTick = API.Get_tick()\n",
    "  OBJECTS_table = API.ReadAllObjectsArray({-1},{-1},{})\n",
    "\n",
);

/// Statement sequence fixture as the editor saves it.
const SAVED_SEQUENCE: &str = r#"[
  {"id": "statement-1", "enabled": true, "inMainLoop": true,
   "body": {"call": {"function": {"name": "Sleep_tick", "category": "Utility"},
                     "parameters": [{"name": "count", "type": "number", "value": "3"}]}}},
  {"id": "statement-2", "enabled": false,
   "body": {"call": {"function": {"name": "BankOpen2"}, "parameters": []}}},
  {"id": "statement-3", "inMainLoop": false,
   "body": {"control": {"for": {"loopVariable": "n", "startValue": "10", "endValue": "1", "stepValue": "-1"}}}},
  {"id": "statement-4", "inMainLoop": false, "body": {"control": "end"}}
]"#;

fn tick_only() -> StatementList {
    let catalog = Catalog::builtin();
    let mut list = StatementList::new();
    list.add(catalog.function("Get_tick").unwrap());
    list
}

fn inside(list: &mut StatementList, spec: ControlSpec) -> StatementId {
    list.add_control(spec).unwrap()
}

fn if_spec(condition: &str, in_main_loop: bool) -> ControlSpec {
    ControlSpec::If {
        condition: condition.into(),
        in_main_loop,
    }
}

#[test]
fn single_call_lands_in_main_loop() {
    let script = generate(tick_only().statements());
    let expected = format!("{}{}{}", PREAMBLE, LOOP_OPEN, "  API.Get_tick()\nend\n");
    assert_eq!(script, expected);
    assert_eq!(script.matches("\nend\n").count(), 1);
}

#[test]
fn for_loop_without_step_clause() {
    let mut list = StatementList::new();
    inside(
        &mut list,
        ControlSpec::For {
            loop_variable: "i".into(),
            start_value: "1".into(),
            end_value: "10".into(),
            step_value: "1".into(),
            in_main_loop: true,
        },
    );
    inside(&mut list, ControlSpec::End { in_main_loop: true });
    let script = generate(list.statements());
    let expected = format!("{}{}{}", PREAMBLE, LOOP_OPEN, "  for i = 1, 10 do\n\n  end\nend\n");
    assert_eq!(script, expected);
}

#[test]
fn full_program_layout() {
    let catalog = Catalog::builtin();
    let mut list = StatementList::new();
    inside(
        &mut list,
        ControlSpec::Function {
            name: "helper".into(),
            params: "a".into(),
            body: String::new(),
        },
    );
    list.add(catalog.function("Get_tick").unwrap());
    inside(&mut list, if_spec("ready", false));
    let sleep = list.add(catalog.function("Sleep_tick").unwrap());
    list.update(&sleep, StatementPatch::in_main_loop(false));
    inside(&mut list, ControlSpec::End { in_main_loop: false });
    inside(
        &mut list,
        ControlSpec::While {
            condition: "API.InvFull_()".into(),
            in_main_loop: true,
        },
    );
    let ability = list.add(catalog.function("DoAction_Ability").unwrap());
    list.update(&ability, StatementPatch::parameter("abilityName", "Surge"));
    inside(&mut list, ControlSpec::End { in_main_loop: true });
    let bank = list.add(catalog.function("BankOpen2").unwrap());
    list.update(&bank, StatementPatch::enabled(false));

    let script = generate(list.statements());
    let expected = format!(
        "{}{}{}{}",
        PREAMBLE,
        concat!(
            "-- Function declarations\n",
            "function helper(a)\n",
            "  return true\n",
            "end\n",
            "\n",
            "-- Code outside main loop\n",
            "if ready then\n",
            "\n",
            "  API.Sleep_tick(1)\n",
            "end\n",
            "\n",
        ),
        LOOP_OPEN,
        concat!(
            "  API.Get_tick()\n",
            "  while API.InvFull_() do\n",
            "\n",
            "    API.DoAction_Ability(\"Surge\", 1, nil, false)\n",
            "  end\n",
            "end\n",
        ),
    );
    assert_eq!(script, expected);
    assert!(!script.contains("BankOpen2"));

    let report = Validator::new().unwrap().validate(&script);
    assert!(report.is_valid, "{:?}", report.errors);
}

#[test]
fn generation_is_deterministic() {
    let catalog = Catalog::builtin();
    let mut list = tick_only();
    inside(&mut list, if_spec("CurrentTick > 10", true));
    list.add(catalog.function("RandomSleep2").unwrap());
    inside(&mut list, ControlSpec::End { in_main_loop: true });
    let first = generate(list.statements());
    let second = generate(list.statements());
    assert_eq!(first, second);
}

#[test]
fn disabled_statements_leave_no_trace() {
    let catalog = Catalog::builtin();
    let mut list = StatementList::new();
    let decl = inside(
        &mut list,
        ControlSpec::Function {
            name: "neverEmitted".into(),
            params: String::new(),
            body: "  print('x')".into(),
        },
    );
    let cond = inside(&mut list, if_spec("hiddenCondition", false));
    let call = list.add(catalog.function("GetLocalPlayerName").unwrap());
    for id in [&decl, &cond, &call] {
        list.update(id, StatementPatch::enabled(false));
    }
    let script = generate(list.statements());
    assert!(!script.contains("neverEmitted"));
    assert!(!script.contains("hiddenCondition"));
    assert!(!script.contains("GetLocalPlayerName"));
    assert!(!script.contains("-- Function declarations"));
    assert!(script.contains("print(\"Add functions to build your script!\")"));
}

#[test]
fn partitions_appear_in_section_order() {
    let catalog = Catalog::builtin();
    let mut list = StatementList::new();
    list.add(catalog.function("SystemTime").unwrap());
    let outside = list.add(catalog.function("ScriptRuntimeString").unwrap());
    list.update(&outside, StatementPatch::in_main_loop(false));
    inside(
        &mut list,
        ControlSpec::Function {
            name: "declared".into(),
            params: "x, y".into(),
            body: "  return x + y".into(),
        },
    );

    let script = generate(list.statements());
    let decl_at = script.find("function declared(x, y)\n  return x + y\nend\n").unwrap();
    let outside_at = script.find("API.ScriptRuntimeString()").unwrap();
    let header_at = script.find("while API.Read_LoopyLoop() do").unwrap();
    let inside_at = script.find("  API.SystemTime()").unwrap();
    let close_at = script.rfind("end\n").unwrap();
    assert!(decl_at < outside_at);
    assert!(outside_at < header_at);
    assert!(header_at < inside_at && inside_at < close_at);
}

#[test]
fn stray_ends_clamp_to_bucket_floor() {
    let catalog = Catalog::builtin();
    let mut list = StatementList::new();
    inside(&mut list, ControlSpec::End { in_main_loop: false });
    inside(&mut list, ControlSpec::End { in_main_loop: true });
    inside(&mut list, ControlSpec::End { in_main_loop: true });
    list.add(catalog.function("Get_tick").unwrap());

    let script = generate(list.statements());
    assert!(script.contains("-- Code outside main loop\nend\n\n"));
    assert!(script.ends_with("  end\n\n  end\n\n  API.Get_tick()\nend\n"));

    let report = Validator::new().unwrap().validate(&script);
    assert!(!report.is_valid);
    assert!(report.errors.iter().all(|e| e.code == "unexpected-end"));
}

#[test]
fn nested_indent_returns_to_opener_level() {
    let catalog = Catalog::builtin();
    let mut list = StatementList::new();
    inside(&mut list, if_spec("a", true));
    inside(&mut list, if_spec("b", true));
    list.add(catalog.function("Get_tick").unwrap());
    inside(&mut list, ControlSpec::End { in_main_loop: true });
    list.add(catalog.function("SystemTime").unwrap());
    inside(&mut list, ControlSpec::End { in_main_loop: true });
    list.add(catalog.function("InvFull_").unwrap());

    let script = generate(list.statements());
    assert!(script.contains("      API.Get_tick()\n"));
    assert!(script.contains("    end\n"));
    assert!(script.contains("    API.SystemTime()\n"));
    assert!(script.contains("\n  API.InvFull_()\nend\n"));
    assert!(Validator::new().unwrap().validate(&script).is_valid);
}

#[test]
fn unpaired_openers_fail_round_trip() {
    let mut list = tick_only();
    inside(&mut list, if_spec("x", true));
    let script = generate(list.statements());
    let report = Validator::new().unwrap().validate(&script);
    assert!(!report.is_valid);
    // The user's `if` swallows the loop's closing `end`, leaving the loop open.
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].message, "unclosed \"while\" block");
}

#[test]
fn saved_sequence_compiles() {
    let script = crate::compile_source_to_script(SAVED_SEQUENCE, CodegenOptions::default()).unwrap();
    assert!(script.contains("-- Code outside main loop\nfor n = 10, 1, -1 do\n\nend\n"));
    assert!(script.contains("  API.Sleep_tick(3)\nend\n"));
    assert!(!script.contains("BankOpen2"));
    assert!(crate::validate(&script).unwrap().is_valid);
}

#[test]
fn bank_loop_demo_generates_valid_script() {
    let source = include_str!("../demos/bank_loop.json");
    let script = crate::compile_source_to_script(source, CodegenOptions::default()).unwrap();
    assert!(script.contains(concat!(
        "-- Function declarations\n",
        "function needsBank()\n",
        "  return API.InvFull_()\n",
        "end\n",
        "\n",
        "-- Code outside main loop\n",
        "API.Write_LoopyLoop(true)\n",
        "\n",
    )));
    assert!(script.ends_with(concat!(
        "  if needsBank() then\n",
        "\n",
        "    API.BankOpen2()\n",
        "    API.BankAllItems()\n",
        "  end\n",
        "\n",
        "  API.RandomSleep2(600, 300, 100)\n",
        "end\n",
    )));
    assert!(!script.contains("GetLocalPlayerName"));
    assert!(crate::validate(&script).unwrap().is_valid);
}

#[test]
fn saved_sequence_resumes_ids_and_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sequence.json");
    std::fs::write(&path, SAVED_SEQUENCE).unwrap();

    let mut list = crate::load_statements(&path).unwrap();
    assert_eq!(list.len(), 4);
    let id = list.add(Catalog::builtin().function("Get_tick").unwrap());
    assert_eq!(id.as_str(), "statement-5");

    crate::save_statements(&path, &list).unwrap();
    let reloaded = crate::load_statements(&path).unwrap();
    assert_eq!(reloaded.statements(), list.statements());
    assert_eq!(generate(reloaded.statements()), generate(list.statements()));
}

#[test]
fn loaded_declaration_with_blank_body_gets_default_body() {
    for body in ["\"\"", "\"  \\n\""] {
        let source = format!(
            r#"[{{"id": "d", "inMainLoop": false,
                 "body": {{"control": {{"function": {{"name": "f", "params": "", "body": {}}}}}}}}}]"#,
            body
        );
        let script = crate::compile_source_to_script(&source, CodegenOptions::default()).unwrap();
        assert!(
            script.contains("-- Function declarations\nfunction f()\n  return true\nend\n\n"),
            "{}",
            script
        );
    }
}

#[test]
fn malformed_sequence_is_an_error() {
    assert!(crate::parse_statements("[{\"id\": 1}]").is_err());
    assert!(crate::compile_source_to_script("nope", CodegenOptions::default()).is_err());
}
