//! Interactive ledger session
//!
//! A numbered menu over a [`TransactionManager`]. Every handler receives the
//! session state and the prompter explicitly.

use std::io::{BufRead, Write};

use tracing::info;

use super::prompt::{parse_amount, Prompter, INVALID_AMOUNT, INVALID_DATE};
use crate::config::Settings;
use crate::display::{format_summary, format_transaction_table, format_visual_summary};
use crate::error::TallyResult;
use crate::models::{parse_date, Term, Transaction, TransactionEdit, TransactionKind};
use crate::services::{recurring, Frequency, TransactionManager};
use crate::storage::Storage;

const MENU: &str = "\n1: Add Income/Expense 2: Add Recurring Transaction 3: List Transactions \
                    4: Summary 5: Visual Summary 6: Edit Transaction 7: Exit";
const INVALID_TYPE: &str = "Invalid type. Please enter Income or Expense.";
const INVALID_TERM: &str = "Invalid term. Please enter short-term or long-term.";
const INVALID_FREQUENCY: &str = "Invalid frequency. Please enter weekly or monthly.";

/// State shared by every ledger menu handler
pub struct LedgerSession {
    pub manager: TransactionManager,
    pub settings: Settings,
}

impl LedgerSession {
    /// Load both buckets from storage
    ///
    /// Returns the session and the diagnostics for any bucket that had to
    /// start empty.
    pub fn open(storage: Storage, settings: Settings) -> (Self, Vec<String>) {
        let mut manager = TransactionManager::new(storage);
        let diagnostics = manager.load();
        (Self { manager, settings }, diagnostics)
    }
}

/// Run the menu loop until the user exits or input ends
pub fn run_ledger<R: BufRead, W: Write>(
    session: &mut LedgerSession,
    prompter: &mut Prompter<R, W>,
) -> TallyResult<()> {
    loop {
        prompter.say(MENU)?;

        let result = match prompter.ask("Choose an action: ") {
            Ok(choice) => match choice.as_str() {
                "1" => handle_add(session, prompter),
                "2" => handle_add_recurring(session, prompter),
                "3" => handle_list(session, prompter),
                "4" => handle_summary(session, prompter, false),
                "5" => handle_summary(session, prompter, true),
                "6" => handle_edit(session, prompter),
                "7" => break,
                _ => Ok(()),
            },
            Err(e) => Err(e),
        };

        match result {
            Err(e) if e.is_input_closed() => break,
            other => other?,
        }
    }

    prompter.say("Exiting the application.")
}

fn ask_kind<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> TallyResult<TransactionKind> {
    prompter.ask_until("Enter type (Income/Expense): ", INVALID_TYPE, |s| {
        s.parse::<TransactionKind>()
    })
}

fn ask_term<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
) -> TallyResult<Term> {
    prompter.ask_until(prompt, INVALID_TERM, |s| s.parse::<Term>())
}

/// Type, amount, description, date and term for a new transaction
fn ask_transaction<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> TallyResult<Transaction> {
    let kind = ask_kind(prompter)?;
    let amount = prompter.ask_amount("Enter amount: ")?;
    let description = prompter.ask("Enter description: ")?;
    let date = prompter.ask_date("Enter date (YYYY-MM-DD): ")?;
    let term = ask_term(prompter, "Enter term (short-term/long-term): ")?;
    Ok(Transaction::new(kind, amount, description, date, term))
}

fn handle_add<R: BufRead, W: Write>(
    session: &mut LedgerSession,
    prompter: &mut Prompter<R, W>,
) -> TallyResult<()> {
    let transaction = ask_transaction(prompter)?;
    prompter.say(format!("Added: {}", transaction))?;
    session.manager.add(transaction);
    session.manager.save()
}

fn handle_add_recurring<R: BufRead, W: Write>(
    session: &mut LedgerSession,
    prompter: &mut Prompter<R, W>,
) -> TallyResult<()> {
    let template = ask_transaction(prompter)?;
    let frequency: Frequency = prompter.ask_until(
        "Enter frequency (weekly/monthly): ",
        INVALID_FREQUENCY,
        |s| s.parse::<Frequency>(),
    )?;
    let end = prompter.ask_date("Enter end date (YYYY-MM-DD): ")?;

    let generated = recurring::generate(&template, end, frequency);
    info!(count = generated.len(), %frequency, "generated recurring transactions");
    prompter.say(format!("Added {} {} transaction(s).", generated.len(), frequency))?;

    session.manager.extend(generated);
    session.manager.save()
}

fn handle_list<R: BufRead, W: Write>(
    session: &mut LedgerSession,
    prompter: &mut Prompter<R, W>,
) -> TallyResult<()> {
    let term = ask_term(prompter, "Enter term to list (short-term/long-term): ")?;
    let table = format_transaction_table(term, session.manager.list_by_term(term));
    prompter.say(table.trim_end())
}

fn handle_summary<R: BufRead, W: Write>(
    session: &mut LedgerSession,
    prompter: &mut Prompter<R, W>,
    visual: bool,
) -> TallyResult<()> {
    let term = ask_term(prompter, "Choose the type of summary (short-term/long-term): ")?;
    let summary = session.manager.summary(term);

    prompter.say(format_summary(&summary))?;
    if visual {
        prompter.say(format_visual_summary(&summary, session.settings.summary_bar_width))?;
    }
    Ok(())
}

fn handle_edit<R: BufRead, W: Write>(
    session: &mut LedgerSession,
    prompter: &mut Prompter<R, W>,
) -> TallyResult<()> {
    let description = prompter.ask("Enter the description of the transaction to edit: ")?;
    let term = ask_term(prompter, "Enter the term (short-term/long-term): ")?;

    let edited = session.manager.edit(&description, term, |txn| {
        prompter.say(format!("Editing Transaction: {}", txn))?;

        let kind = prompter.ask_optional(
            &format!("Enter new type (Income/Expense) [{}]: ", txn.kind),
            INVALID_TYPE,
            |s| s.parse::<TransactionKind>(),
        )?;
        let amount = prompter.ask_optional(
            &format!("Enter new amount [{}]: ", txn.amount.format_plain()),
            INVALID_AMOUNT,
            parse_amount,
        )?;
        let description = prompter.ask(&format!("Enter new description [{}]: ", txn.description))?;
        let date = prompter.ask_optional(
            &format!("Enter new date (YYYY-MM-DD) [{}]: ", txn.date),
            INVALID_DATE,
            parse_date,
        )?;

        Ok(TransactionEdit {
            kind,
            amount,
            description: Some(description).filter(|d| !d.is_empty()),
            date,
        })
    })?;

    if edited > 0 {
        prompter.say(format!("Updated {} transaction(s).", edited))?;
    }
    Ok(())
}
