use application::RosterService;
use colored::Colorize;
use domain::{CommitError, RosterError};
use shared::types::Result;

use crate::prompt::Prompter;
use crate::render::{render_draft, render_roster, render_slot, slot_header};

pub const CLEAR_PROMPT: &str = "Are you sure you want to clear every student in this slot?";

const SLOT_ACTIONS: [&str; 4] = ["Add student", "Remove student", "Clear slot", "Back"];

/// The single roster screen. Reads the service to draw and forwards each
/// menu pick to exactly one service call.
pub struct RosterScreen<P: Prompter> {
    service: RosterService,
    prompter: P,
}

impl<P: Prompter> RosterScreen<P> {
    pub fn new(service: RosterService, prompter: P) -> Self {
        Self { service, prompter }
    }

    pub fn service(&self) -> &RosterService {
        &self.service
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn into_service(self) -> RosterService {
        self.service
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.prompter.refresh()?;
            let (mut items, slot_ids) = {
                let summaries = self.service.summaries();
                self.prompter.show(&render_roster(&summaries));
                let items: Vec<String> = summaries.iter().map(slot_header).collect();
                let ids: Vec<String> = summaries.iter().map(|s| s.slot.id.clone()).collect();
                (items, ids)
            };
            items.push("Quit".to_string());

            let choice = self.prompter.select("Pick a class", &items, 0)?;
            match slot_ids.get(choice) {
                Some(slot_id) => self.slot_menu(slot_id)?,
                None => break,
            }
        }
        Ok(())
    }

    fn slot_menu(&mut self, slot_id: &str) -> Result<()> {
        loop {
            self.prompter.refresh()?;
            let summary = self.service.summary(slot_id)?;
            self.prompter.show(&render_slot(&summary));

            let items: Vec<String> = SLOT_ACTIONS.iter().map(|s| s.to_string()).collect();
            match self.prompter.select("What now?", &items, 0)? {
                0 => self.add_student(slot_id)?,
                1 => self.remove_student(slot_id)?,
                2 => self.clear_slot(slot_id)?,
                _ => return Ok(()),
            }
        }
    }

    fn add_student(&mut self, slot_id: &str) -> Result<()> {
        let label = self.service.summary(slot_id)?.slot.label.clone();
        self.service.open_draft(slot_id)?;

        loop {
            let Some(draft) = self.service.draft() else {
                return Ok(());
            };
            self.prompter.show(&render_draft(draft, &label));
            let name = draft.name.clone();
            let items = vec![
                "Type name".to_string(),
                "Choose plan".to_string(),
                "Save".to_string(),
                "Cancel".to_string(),
            ];

            match self.prompter.select("New student", &items, 0)? {
                0 => {
                    let text = self.prompter.input("Student name", &name)?;
                    self.service.set_draft_name(&text)?;
                }
                1 => {
                    let plans = self.service.plan_options().to_vec();
                    let labels: Vec<String> = plans.iter().map(|p| p.to_string()).collect();
                    let pick = self.prompter.select("Plan", &labels, 0)?;
                    if let Some(plan) = plans.get(pick) {
                        self.service.set_draft_plan(*plan)?;
                    }
                }
                2 => match self.service.commit_draft() {
                    Ok(student) => {
                        self.prompter
                            .show(&format!("Added {}", student).green().to_string());
                        return Ok(());
                    }
                    Err(err) => self.prompter.show(&commit_message(&err).red().to_string()),
                },
                _ => {
                    self.service.cancel_draft();
                    return Ok(());
                }
            }
        }
    }

    fn remove_student(&mut self, slot_id: &str) -> Result<()> {
        let (names, mut items): (Vec<String>, Vec<String>) = self
            .service
            .summary(slot_id)?
            .students
            .iter()
            .map(|s| (s.name.clone(), s.to_string()))
            .unzip();
        if names.is_empty() {
            self.prompter.show(&"No students to remove.".yellow().to_string());
            return Ok(());
        }
        items.push("Back".to_string());

        let choice = self.prompter.select("Remove which student?", &items, 0)?;
        if let Some(name) = names.get(choice) {
            self.service.remove(slot_id, name)?;
        }
        Ok(())
    }

    fn clear_slot(&mut self, slot_id: &str) -> Result<()> {
        if self.prompter.confirm(CLEAR_PROMPT)? {
            self.service.clear(slot_id)?;
        } else {
            self.prompter.show(&"Nothing was cleared.".yellow().to_string());
        }
        Ok(())
    }
}

/// Text shown to staff when a save is refused.
pub fn commit_message(err: &CommitError) -> String {
    match err {
        CommitError::EmptyName => "Please type the student's name.".to_string(),
        CommitError::NoPlanSelected => "Please select the student's plan.".to_string(),
        CommitError::Roster(RosterError::CapacityExceeded { capacity, .. }) => {
            format!("Maximum of {} students reached!", capacity)
        }
        other => other.to_string(),
    }
}
