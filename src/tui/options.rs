use std::io;

use passgauge::{CharClass, classify};
use zeroize::Zeroize;

use super::session::{Session, Status};
use super::{
    enter_prompt, get_numeric_input, get_password_input, print_help, print_main_menu,
    print_report,
};
use crate::clipboard;
use crate::settings::{Settings, default_path};
use crate::terminal::{clear, reset_terminal};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

pub fn gen_main_menu() -> io::Result<()> {
    reset_terminal();
    clear();

    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default settings");
        Settings::default()
    });
    let mut session = Session::new(settings);
    session.generate();

    menu_loop(&mut session, || {
        super::get_editable_input(enter_prompt(), "")
    })
}

/// Redraw and dispatch until the user quits. A terminal that cannot be
/// read ends the loop with its error.
fn menu_loop(
    session: &mut Session,
    mut next_choice: impl FnMut() -> io::Result<Option<String>>,
) -> io::Result<()> {
    loop {
        clear();
        print_main_menu(session);

        let action = match next_choice() {
            Ok(Some(input)) => menu_options(input.trim(), session),
            Ok(None) => Ok(Continue),
            Err(e) => Err(e),
        };

        match action {
            Ok(Continue) => {}
            Ok(Break) => {
                clear();
                return Ok(());
            }
            Err(e) => {
                tracing::error!(error = %e, "terminal input failed");
                return Err(e);
            }
        }
    }
}

fn menu_options(choice: &str, session: &mut Session) -> io::Result<LoopAction> {
    session.status = None;

    match choice {
        "" => session.generate(),
        "1" => {
            if let Some(len) =
                get_numeric_input("Enter new password length", session.settings.length)?
            {
                session.set_length(len);
            }
        }
        "+" | "=" => session.adjust_length(1),
        "-" | "_" => session.adjust_length(-1),
        "2" => session.toggle_class(CharClass::Lowercase),
        "3" => session.toggle_class(CharClass::Uppercase),
        "4" => session.toggle_class(CharClass::Number),
        "5" => session.toggle_class(CharClass::Symbol),
        "v" => session.toggle_visibility(),
        "c" => copy_current(session),
        "t" => {
            if let Err(e) = session.toggle_theme() {
                session.set_status(Status::Error(format!("Error saving theme: {e}")));
            }
        }
        "u" => session.settings.urandom = !session.settings.urandom,
        "k" => check_typed(session)?,
        "s" => match session.settings.save() {
            Ok(()) => session.set_status(Status::Info(format!(
                "Settings saved \u{2192} {}",
                default_path().display()
            ))),
            Err(e) => session.set_status(Status::Error(format!("Error saving settings: {e}"))),
        },
        "h" | "help" => {
            clear();
            print_help();
            super::get_editable_input("Press Enter to return", "")?;
        }
        "q" | "quit" => return Ok(Break),
        _ => session.set_status(Status::Error("Invalid option.".into())),
    }
    Ok(Continue)
}

fn copy_current(session: &mut Session) {
    let result = clipboard::copy(session.current().unwrap_or(""));
    match result {
        Ok(()) => session.set_status(Status::Info("Copied to clipboard".into())),
        Err(e) => {
            tracing::warn!(error = %e, "copy failed");
            session.set_status(Status::Error(format!("Error: {e}")));
        }
    }
}

fn check_typed(session: &mut Session) -> io::Result<()> {
    let theme = session.settings.theme;
    let Some(mut typed) = get_password_input("Password to check", session.is_visible(), theme)?
    else {
        return Ok(());
    };
    let report = classify(&typed);
    typed.zeroize();

    clear();
    print_report(&report, theme);
    super::get_editable_input("Press Enter to return", "")?;
    Ok(())
}
