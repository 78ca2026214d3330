//! The tool's command surface: one wizard per menu entry, composed from
//! the core engine against the company aggregate.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{Command, Menu, Mode, Prompter, Rule, Step};
use crate::domain::company::Company;
use crate::domain::model::{Department, Staff, TEXT_MAX, TEXT_MIN};

// Wizard scratch. Every acquisition step overwrites its own slot, so
// back-navigation never resurrects a stale value.
#[derive(Default)]
struct DepartmentDraft {
    code: Option<i32>,
    name: Option<String>,
}

#[derive(Default)]
struct StaffDraft {
    number: Option<i32>,
    name: Option<String>,
    ruby: Option<String>,
    department_code: Option<i32>,
}

fn text_length_rule(field: &str) -> Rule<'static, String> {
    Rule::new(
        format!("{} must be {} to {} characters", field, TEXT_MIN, TEXT_MAX),
        |s: &String| (TEXT_MIN..=TEXT_MAX).contains(&s.chars().count()),
    )
}

fn text_step(
    draft_slot: impl Fn(String) + 'static,
    prompt: &'static str,
) -> Step<Company> {
    Box::new(move |_company, prompter| {
        match prompter.value(prompt, &[text_length_rule(prompt)])? {
            Some(text) => {
                draft_slot(text);
                Ok(true)
            }
            None => Ok(false),
        }
    })
}

pub fn register_department_command() -> Command<Company> {
    let draft = Rc::new(RefCell::new(DepartmentDraft::default()));

    let code_step: Step<Company> = {
        let draft = Rc::clone(&draft);
        Box::new(move |company, prompter| {
            let taken: Vec<i32> = company.departments().iter().map(Department::code).collect();
            let rules = [
                Rule::new(
                    format!(
                        "department code must be {} to {}",
                        Department::CODE_MIN,
                        Department::CODE_MAX
                    ),
                    |code: &i32| (Department::CODE_MIN..=Department::CODE_MAX).contains(code),
                ),
                Rule::new("that department code is already registered", move |code: &i32| {
                    !taken.contains(code)
                }),
            ];
            match prompter.value("department code", &rules)? {
                Some(code) => {
                    draft.borrow_mut().code = Some(code);
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    };

    let name_step: Step<Company> = {
        let draft = Rc::clone(&draft);
        text_step(move |name| draft.borrow_mut().name = Some(name), "department name")
    };

    let commit_step: Step<Company> = Box::new(move |company, prompter| {
        let acquired = {
            let d = draft.borrow();
            (d.code, d.name.clone())
        };
        let (Some(code), Some(name)) = acquired else {
            return Ok(false);
        };
        company.add_department(Department::new(code, name)?);
        tracing::info!(code, "department registered");
        prompter.say("Registered.")?;
        Ok(true)
    });

    Command::new(
        "Register department",
        Mode::Repeat,
        vec![code_step, name_step, commit_step],
    )
}

pub fn delete_department_command() -> Command<Company> {
    let draft = Rc::new(RefCell::new(DepartmentDraft::default()));

    let code_step: Step<Company> = {
        let draft = Rc::clone(&draft);
        Box::new(move |company, prompter| {
            let known: Vec<i32> = company.departments().iter().map(Department::code).collect();
            let rules = [Rule::new(
                "no department with that code is registered",
                move |code: &i32| known.contains(code),
            )];
            match prompter.value("department code", &rules)? {
                Some(code) => {
                    draft.borrow_mut().code = Some(code);
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    };

    let commit_step: Step<Company> = Box::new(move |company, prompter| {
        let Some(code) = draft.borrow().code else {
            return Ok(false);
        };
        if company.remove_department(code) {
            tracing::info!(code, "department deleted");
            prompter.say("Deleted.")?;
        } else {
            prompter.say("That department is still referenced by staff and was not deleted.")?;
        }
        Ok(true)
    });

    Command::new("Delete department", Mode::Once, vec![code_step, commit_step])
}

pub fn list_departments_command() -> Command<Company> {
    Command::single("List departments", Mode::Once, |company: &mut Company, prompter| {
        let Some(text) = prompter.value::<String>("search text (empty for all)", &[])? else {
            return Ok(false);
        };
        let matches = company.get_departments(&text);
        prompter.say(&format!("{} department(s)", matches.len()))?;
        for department in matches {
            prompter.say(&format!("  {}  {}", department.code(), department.name()))?;
        }
        Ok(true)
    })
}

pub fn register_staff_command() -> Command<Company> {
    let draft = Rc::new(RefCell::new(StaffDraft::default()));

    let number_step: Step<Company> = {
        let draft = Rc::clone(&draft);
        Box::new(move |company, prompter| {
            let taken: Vec<i32> = company.staffs().iter().map(Staff::number).collect();
            let rules = [
                Rule::new(
                    format!(
                        "staff number must be {} to {}",
                        Staff::NUMBER_MIN,
                        Staff::NUMBER_MAX
                    ),
                    |number: &i32| (Staff::NUMBER_MIN..=Staff::NUMBER_MAX).contains(number),
                ),
                Rule::new("that staff number is already registered", move |number: &i32| {
                    !taken.contains(number)
                }),
            ];
            match prompter.value("staff number", &rules)? {
                Some(number) => {
                    draft.borrow_mut().number = Some(number);
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    };

    let name_step: Step<Company> = {
        let draft = Rc::clone(&draft);
        text_step(move |name| draft.borrow_mut().name = Some(name), "staff name")
    };

    let ruby_step: Step<Company> = {
        let draft = Rc::clone(&draft);
        text_step(move |ruby| draft.borrow_mut().ruby = Some(ruby), "phonetic reading")
    };

    let department_step: Step<Company> = {
        let draft = Rc::clone(&draft);
        Box::new(move |company, prompter| {
            let known: Vec<i32> = company.departments().iter().map(Department::code).collect();
            let rules = [Rule::new(
                "no department with that code is registered",
                move |code: &i32| known.contains(code),
            )];
            match prompter.value("department code", &rules)? {
                Some(code) => {
                    draft.borrow_mut().department_code = Some(code);
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    };

    let commit_step: Step<Company> = Box::new(move |company, prompter| {
        let acquired = {
            let d = draft.borrow();
            (d.number, d.name.clone(), d.ruby.clone(), d.department_code)
        };
        let (Some(number), Some(name), Some(ruby), Some(code)) = acquired else {
            return Ok(false);
        };
        let Some(department) = company.department_by_code(code).cloned() else {
            return Ok(false);
        };
        company.add_staff(Staff::new(number, name, ruby, department)?);
        tracing::info!(number, department = code, "staff registered");
        prompter.say("Registered.")?;
        Ok(true)
    });

    Command::new(
        "Register staff",
        Mode::Repeat,
        vec![number_step, name_step, ruby_step, department_step, commit_step],
    )
}

pub fn delete_staff_command() -> Command<Company> {
    let draft = Rc::new(RefCell::new(StaffDraft::default()));

    let number_step: Step<Company> = {
        let draft = Rc::clone(&draft);
        Box::new(move |company, prompter| {
            let known: Vec<i32> = company.staffs().iter().map(Staff::number).collect();
            let rules = [Rule::new(
                "no staff with that number is registered",
                move |number: &i32| known.contains(number),
            )];
            match prompter.value("staff number", &rules)? {
                Some(number) => {
                    draft.borrow_mut().number = Some(number);
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    };

    let commit_step: Step<Company> = Box::new(move |company, prompter| {
        let Some(number) = draft.borrow().number else {
            return Ok(false);
        };
        if company.remove_staff(number) {
            tracing::info!(number, "staff deleted");
            prompter.say("Deleted.")?;
        } else {
            prompter.say("No staff with that number is registered.")?;
        }
        Ok(true)
    });

    Command::new("Delete staff", Mode::Once, vec![number_step, commit_step])
}

pub fn find_staff_command() -> Command<Company> {
    Command::single("Find staff", Mode::Once, |company: &mut Company, prompter| {
        let Some(text) = prompter.value::<String>("search text (empty for all)", &[])? else {
            return Ok(false);
        };
        let matches = company.get_staffs(&text);
        prompter.say(&format!("{} staff member(s)", matches.len()))?;
        for staff in matches {
            prompter.say(&format!(
                "  {}  {} ({})  {}",
                staff.number(),
                staff.name(),
                staff.ruby(),
                staff.department().name()
            ))?;
        }
        Ok(true)
    })
}

pub fn exit_command() -> Command<Company> {
    Command::noop("Exit", Mode::Exit)
}

pub fn build_menu() -> Menu<Company> {
    Menu::new(vec![
        ('a', register_department_command()),
        ('d', delete_department_command()),
        ('l', list_departments_command()),
        ('s', register_staff_command()),
        ('r', delete_staff_command()),
        ('f', find_staff_command()),
        ('e', exit_command()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_mnemonics_are_distinct() {
        // construction panics on a duplicate; reaching here is the test
        let menu = build_menu();
        assert_eq!(menu.entries().count(), 7);
    }
}
