//! Whole-session tests: a scripted console drives the real menu, wizards
//! and aggregate exactly as an operator would.

use staff_roster::core::DEFAULT_CANCEL_TOKEN;
use staff_roster::{run_session, Company, Department, LocalStorage, ScriptedConsole, Staff};
use tempfile::TempDir;

fn run(company: &mut Company, inputs: &[&str]) -> ScriptedConsole {
    let mut console = ScriptedConsole::new(inputs);
    run_session(company, &mut console, DEFAULT_CANCEL_TOKEN).unwrap();
    console
}

fn company_with_staff() -> Company {
    let mut company = Company::new();
    company.add_department(Department::new(181, "Dev").unwrap());
    let dev = company.department_by_code(181).unwrap().clone();
    company.add_staff(Staff::new(826, "Taro", "タロウ", dev).unwrap());
    company
}

#[test]
fn register_department_then_exit() {
    let mut company = Company::new();
    let console = run(&mut company, &["a", "181", "Dev", "y", "e"]);

    assert_eq!(company.departments().len(), 1);
    assert_eq!(company.department_by_code(181).unwrap().name(), "Dev");
    assert!(console.titles().iter().any(|t| t == "== Register department =="));
}

#[test]
fn declining_the_menu_gate_repeats_the_wizard() {
    let mut company = Company::new();
    let console = run(
        &mut company,
        &["a", "181", "Dev", "n", "200", "Sales", "y", "e"],
    );

    assert_eq!(company.departments().len(), 2);
    // banner shows once per pass
    let banners = console
        .titles()
        .iter()
        .filter(|t| *t == "== Register department ==")
        .count();
    assert_eq!(banners, 2);
}

#[test]
fn cancelling_the_first_step_abandons_the_wizard() {
    let mut company = Company::new();
    run(&mut company, &["a", "/", "e"]);
    assert!(company.departments().is_empty());
}

#[test]
fn cancelling_mid_wizard_backs_up_one_step() {
    let mut company = Company::new();
    // staff wizard: number, name, cancel at the reading, re-enter the
    // name, then finish
    run(
        &mut company,
        &[
            "a", "181", "Dev", "y", // a department to reference
            "s", "826", "Taro", "/", "Jiro", "ジロウ", "181", "y", "e",
        ],
    );

    let staff = company.staff_by_number(826).unwrap();
    assert_eq!(staff.name(), "Jiro");
    assert_eq!(staff.ruby(), "ジロウ");
}

#[test]
fn rule_failures_show_their_message_and_reprompt() {
    let mut company = Company::new();
    let console = run(
        &mut company,
        &[
            "a", "181", "Dev", "y", // department 181
            "s", "826", "Taro", "タロウ", "999", "181", "y", "e",
        ],
    );

    assert_eq!(
        company.staff_by_number(826).unwrap().department().code(),
        181
    );
    assert!(console
        .lines()
        .iter()
        .any(|l| l == "no department with that code is registered"));
}

#[test]
fn out_of_range_codes_never_reach_the_aggregate() {
    let mut company = Company::new();
    let console = run(&mut company, &["a", "99", "1000", "500", "Dev", "y", "e"]);

    assert_eq!(company.departments().len(), 1);
    assert_eq!(company.departments()[0].code(), 500);
    assert!(console
        .lines()
        .iter()
        .any(|l| l == "department code must be 100 to 999"));
}

#[test]
fn deleting_a_referenced_department_is_refused() {
    let mut company = company_with_staff();
    let console = run(&mut company, &["d", "181", "e"]);

    assert_eq!(company.departments().len(), 1);
    assert!(console
        .lines()
        .iter()
        .any(|l| l.contains("still referenced by staff")));
}

#[test]
fn delete_staff_then_department_succeeds() {
    let mut company = company_with_staff();
    run(&mut company, &["r", "826", "d", "181", "e"]);

    assert!(company.staffs().is_empty());
    assert!(company.departments().is_empty());
}

#[test]
fn find_staff_by_department_code() {
    let mut company = company_with_staff();
    let console = run(&mut company, &["f", "181", "e"]);

    assert!(console.lines().iter().any(|l| l == "1 staff member(s)"));
    assert!(console.transcript().contains("Taro"));
}

#[test]
fn cancelling_at_the_menu_re_offers_it() {
    let mut company = Company::new();
    let console = run(&mut company, &["/", "e"]);

    let menus = console
        .titles()
        .iter()
        .filter(|t| *t == "== Main menu ==")
        .count();
    assert_eq!(menus, 2);
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    let mut company = Company::new();
    run(&mut company, &[]);
    assert!(company.departments().is_empty());
}

#[test]
fn full_width_input_is_accepted() {
    let mut company = Company::new();
    // full-width digits for the code, full-width mnemonic for exit
    run(&mut company, &["a", "１８１", "Dev", "y", "ｅ"]);
    assert!(company.department_by_code(181).is_some());
}

#[test]
fn session_result_survives_a_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(dir.path().to_str().unwrap());

    let mut company = Company::new();
    run(
        &mut company,
        &["a", "181", "Dev", "y", "s", "826", "Taro", "タロウ", "181", "y", "e"],
    );
    company.save(&storage, "company.json").unwrap();

    let loaded = Company::load(&storage, "company.json").unwrap();
    assert_eq!(loaded, company);
    assert_eq!(loaded.get_staffs("181").len(), 1);
}
