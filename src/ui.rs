// UI layer: the command loop and one handler per command.
// Handlers work on the `ContactStore` passed in by `main` and talk to the
// user only through a `Console`.

use crate::command::{Command, MENU};
use crate::config::Config;
use crate::console::Console;
use crate::contact::{Contact, ContactField};
use crate::error::{BookError, BookResult};
use crate::pager::{Nav, Pager};
use crate::search::{parse_criteria, search, Criterion};
use crate::storage::SaveDir;
use crate::store::ContactStore;
use tracing::{debug, info, warn};

/// State shared by the handlers for one session.
struct Session<'a, C: Console> {
    console: &'a mut C,
    store: &'a mut ContactStore,
    saves: SaveDir,
    page_size: usize,
}

/// Main interactive loop. Runs until an exit command or end of input.
///
/// Reportable errors are shown with a short pause and the loop goes on;
/// only terminal failures are returned.
pub fn main_menu<C: Console>(
    console: &mut C,
    store: &mut ContactStore,
    config: &Config,
) -> BookResult<()> {
    let mut session = Session {
        console,
        store,
        saves: SaveDir::new(&config.saves_dir),
        page_size: config.page_size,
    };

    loop {
        match session.step() {
            Ok(true) => {}
            Ok(false) | Err(BookError::InputClosed) => break,
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "Command failed");
                session.console.pause(&e.to_string())?;
            }
            Err(e) => return Err(e),
        }
    }
    info!("Session finished");
    Ok(())
}

impl<C: Console> Session<'_, C> {
    /// Show the menu, read one command and run it. Returns false on exit.
    fn step(&mut self) -> BookResult<bool> {
        self.console.print(MENU)?;
        let input = self.console.read_line("Enter a command")?;
        let command =
            Command::parse(&input).ok_or_else(|| BookError::UnknownCommand(input.clone()))?;
        debug!(%command, "Dispatching");

        match command {
            Command::Exit => return Ok(false),
            Command::Save => self.handle_save()?,
            Command::Load => self.handle_load()?,
            Command::Read => {
                self.console.clear()?;
                self.handle_read()?;
            }
            Command::Add => self.handle_add()?,
            Command::Update => self.handle_update()?,
            Command::Find => {
                self.console.clear()?;
                self.handle_find()?;
            }
        }
        Ok(true)
    }

    fn handle_save(&mut self) -> BookResult<()> {
        let name = self
            .console
            .read_line("Enter a save name or leave it empty")?;
        let path = self.saves.save(&name, self.store.contacts())?;
        self.console.clear()?;
        self.console.print(&format!("Saved to {}", path.display()))?;
        Ok(())
    }

    fn handle_load(&mut self) -> BookResult<()> {
        let files = self.saves.list()?;
        for (i, file) in files.iter().enumerate() {
            self.console.print(&format!("{}. {}", i + 1, file))?;
        }

        let choice = self
            .console
            .read_line("Enter a save number or leave it empty")?;
        let file_name = if choice.trim().is_empty() {
            String::new()
        } else {
            let index = parse_index(&choice)?;
            files
                .get(index.wrapping_sub(1))
                .cloned()
                .ok_or(BookError::IndexOutOfRange {
                    index,
                    len: files.len(),
                })?
        };

        match self.saves.load(&file_name) {
            Ok(contacts) => {
                self.store.replace(contacts);
                self.console.clear()?;
                Ok(())
            }
            Err(e @ (BookError::FileNotFound(_) | BookError::MalformedSave { .. })) => {
                self.store.replace(Vec::new());
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    fn handle_read(&mut self) -> BookResult<()> {
        let view: Vec<usize> = (0..self.store.len()).collect();
        browse(&mut *self.console, self.store.contacts(), &view, self.page_size)
    }

    fn handle_add(&mut self) -> BookResult<()> {
        let last_name = self
            .console
            .read_line("Enter a last name or leave it empty")?;
        let first_name = self
            .console
            .read_line("Enter a first name or leave it empty")?;
        let surname = self
            .console
            .read_line("Enter a surname (patronymic) or leave it empty")?;
        let personal_phone = self.console.read_line("Enter a personal (mobile) number")?;
        let work_phone = self
            .console
            .read_line("Enter a work number or leave it empty")?;
        let organisation = self
            .console
            .read_line("Enter an organisation name or leave it empty")?;

        let contact = Contact::new(&personal_phone)
            .with(ContactField::LastName, last_name)
            .with(ContactField::FirstName, first_name)
            .with(ContactField::Surname, surname)
            .with(ContactField::WorkPhone, work_phone)
            .with(ContactField::Organisation, organisation);

        let index = self.store.add(contact)?;
        info!(index, "Contact added");
        self.console.print("Contact added")?;
        Ok(())
    }

    fn handle_update(&mut self) -> BookResult<()> {
        if !self
            .console
            .confirm("Do you know the index of the contact to change?")?
        {
            if self.console.confirm("Do you want to search for it?")? {
                self.handle_find()?;
            } else {
                self.handle_read()?;
            }
        }

        let index = parse_index(
            &self
                .console
                .read_line("Enter the number of the contact to change")?,
        )?;
        self.store.position(index)?;

        let field_name = self.console.read_line("Enter the field to change")?;
        let field = ContactField::from_name(&field_name)
            .ok_or_else(|| BookError::UnknownField(field_name.trim().to_string()))?;

        let value = self.console.read_line("Enter the new value")?;
        self.store.update(index, field, value)?;
        self.console.clear()?;
        Ok(())
    }

    fn handle_find(&mut self) -> BookResult<()> {
        let parsed = parse_criteria(&self.console.read_line(
            "Enter the fields to search by, separated by \", \"",
        )?);
        for name in &parsed.unknown {
            self.console.print(&format!("No such field: {name:?}"))?;
        }

        let mut criteria = Vec::with_capacity(parsed.fields.len());
        for field in parsed.fields {
            let value = self
                .console
                .read_line(&format!("Enter {}", field.label().to_lowercase()))?;
            if field == ContactField::PersonalPhone && value.is_empty() {
                warn!("Empty personal number in search");
                self.console.print(&BookError::EmptyPersonalPhone.to_string())?;
            }
            criteria.push(Criterion::new(field, &value));
        }

        let view: Vec<usize> = search(self.store.contacts(), &criteria)
            .into_iter()
            .map(|m| m.index)
            .collect();
        browse(&mut *self.console, self.store.contacts(), &view, self.page_size)?;
        self.console.print("")?;
        Ok(())
    }
}

/// Parse a 1-based index typed by the user.
fn parse_index(input: &str) -> BookResult<usize> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| BookError::InvalidIndex(input.trim().to_string()))
}

/// Page through `view`, a list of positions in `contacts`, until the user
/// leaves. Row numbers always refer to positions in `contacts`.
pub fn browse<C: Console>(
    console: &mut C,
    contacts: &[Contact],
    view: &[usize],
    page_size: usize,
) -> BookResult<()> {
    let mut pager = Pager::new(view.len(), page_size);
    loop {
        console.clear()?;
        for line in render_page(contacts, view, &pager) {
            console.print(&line)?;
        }
        let nav = Nav::parse(&console.read_line("Enter <, > or exit (e, q)")?);
        debug!(?nav, page = pager.page(), "Navigation");
        if !pager.apply(nav) {
            return Ok(());
        }
    }
}

/// Header and table rows for the current page.
pub fn render_page(contacts: &[Contact], view: &[usize], pager: &Pager) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Current page: {} of {}, found: {}",
            pager.page(),
            pager.total_pages(),
            pager.total()
        ),
        format!(
            "{:<6}{:^20}{:^20}{:^20}{:^24}{:^20}{:^20}",
            "Index",
            ContactField::LastName.label(),
            ContactField::FirstName.label(),
            ContactField::Surname.label(),
            ContactField::PersonalPhone.label(),
            ContactField::WorkPhone.label(),
            ContactField::Organisation.label(),
        ),
    ];

    for &pos in &view[pager.range()] {
        let contact = &contacts[pos];
        lines.push(format!(
            "{:<6}{:^20}{:^20}{:^20}{:^24}{:^20}{:^20}",
            format!("{}.", pos + 1),
            contact.last_name,
            contact.first_name,
            contact.surname,
            contact.personal_phone,
            contact.work_phone,
            contact.organisation_name,
        ));
    }
    lines
}
