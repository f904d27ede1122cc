//! Interactive savings budget session
//!
//! Unlike the ledger, this session does not re-prompt: a malformed number or
//! date ends the session with an error.

use std::io::{BufRead, Write};

use super::prompt::{parse_amount, parse_months, Prompter};
use crate::config::Settings;
use crate::display::format_budget_report;
use crate::error::TallyResult;
use crate::models::budget_entry::SALARY;
use crate::models::{parse_date, Money};
use crate::services::Budget;

const MENU: &str = "Choose action (Salary 's', Bill 'b', Transaction 't', Add to Savings 'a', \
                    Interest 'i', Project Savings 'p', Exit 'e'): ";

/// State shared by every savings menu handler
pub struct SavingsSession {
    pub budget: Budget,
    pub settings: Settings,
}

impl SavingsSession {
    pub fn new(settings: Settings) -> Self {
        Self {
            budget: Budget::new(settings.savings_interest_rate),
            settings,
        }
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }
}

/// Run the menu loop until the user exits or input ends
pub fn run_savings<R: BufRead, W: Write>(
    session: &mut SavingsSession,
    prompter: &mut Prompter<R, W>,
) -> TallyResult<()> {
    loop {
        let result = prompter
            .ask(MENU)
            .and_then(|action| handle_action(session, prompter, &action.to_lowercase()));

        match result {
            Ok(true) => {
                let report =
                    format_budget_report(&session.budget, &session.settings.currency_symbol);
                prompter.say(report)?;
            }
            Ok(false) => break,
            Err(e) if e.is_input_closed() => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Returns `false` when the user chose to exit
fn handle_action<R: BufRead, W: Write>(
    session: &mut SavingsSession,
    prompter: &mut Prompter<R, W>,
    action: &str,
) -> TallyResult<bool> {
    match action {
        "e" => return Ok(false),
        "s" => add_entry(session, prompter, SALARY)?,
        "b" => add_entry(session, prompter, "bill")?,
        "t" => add_entry(session, prompter, "transaction")?,
        "a" => {
            let amount = parse_amount(&prompter.ask("Enter amount to add to savings: ")?)?;
            session.budget.add_to_savings(amount);
        }
        "i" => {
            let months = parse_months(&prompter.ask("Enter number of months: ")?)?;
            let interest = session.budget.calculate_savings_interest(months);
            prompter.say(format!(
                "Interest earned after {} months: {}",
                months,
                session.money(interest)
            ))?;
        }
        "p" => {
            let months = parse_months(&prompter.ask("Enter number of months for projection: ")?)?;
            let contribution =
                parse_amount(&prompter.ask("Enter monthly contribution to savings: ")?)?;
            let projected = session.budget.project_future_savings(contribution, months);
            prompter.say(format!(
                "Projected savings after {} months: {}",
                months,
                session.money(projected)
            ))?;
        }
        _ => {}
    }
    Ok(true)
}

/// Ask for amount and date, then record an entry of the given type
fn add_entry<R: BufRead, W: Write>(
    session: &mut SavingsSession,
    prompter: &mut Prompter<R, W>,
    entry_type: &str,
) -> TallyResult<()> {
    let amount = parse_amount(&prompter.ask("Enter amount: ")?)?;
    let date_input = prompter.ask("Enter date (YYYY-MM-DD) or leave blank for today: ")?;
    let date = if date_input.is_empty() {
        None
    } else {
        Some(parse_date(&date_input)?)
    };
    session.budget.add_transaction(amount, entry_type, date);
    Ok(())
}
