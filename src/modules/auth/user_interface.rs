// src/modules/auth/user_interface.rs
use std::io;

use super::gate::{AuthError, AuthGate};
use super::session::LogoutOutcome;
use crate::modules::app::AppContext;
use crate::modules::bank::handle_bank_link;
use crate::modules::portfolio::user_interface::{
    handle_add_asset, handle_asset_editor, show_portfolio, show_zakat,
};
use crate::modules::utils::io::{ask, ask_password, Prompt};

/// Function to show initial options when starting the program
pub fn show_initial_options() {
    println!("\n*== Welcome to InvestWise ==*");
    println!("1. Sign Up");
    println!("2. Login");
    println!("3. Exit");
}

pub fn show_dashboard_options(username: &str) {
    println!("\n*== Dashboard ==*");
    println!("Logged in as: {}", username);
    println!("1. View Profile");
    println!("2. Add Asset");
    println!("3. View Portfolio");
    println!("4. Edit/Remove Asset");
    println!("5. Calculate Zakat");
    println!("6. Link Bank");
    println!("7. Logout");
}

/// Main menu loop. Returns when the user exits or input ends.
pub fn main_auth_flow(prompt: &mut dyn Prompt, context: &mut AppContext) -> io::Result<()> {
    let result = run_main_menu(prompt, context);

    // A session left open by an input failure is still persisted
    if context.session.is_active() {
        report_logout(context.session.logout(&context.store));
    }

    match result {
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            println!("\nInput closed. Goodbye!");
            Ok(())
        }
        other => other,
    }
}

fn run_main_menu(prompt: &mut dyn Prompt, context: &mut AppContext) -> io::Result<()> {
    loop {
        show_initial_options();
        let choice = ask(prompt, "Choose an option: ")?;

        match choice.as_str() {
            "1" => handle_sign_up(prompt, context)?,
            "2" => handle_login(prompt, context)?,
            "3" => {
                println!("Thank you for using InvestWise!");
                return Ok(());
            }
            _ => println!("Invalid option! Try again"),
        }
    }
}

/// Interactive registration; every rejection returns to the main menu
pub fn handle_sign_up(prompt: &mut dyn Prompt, context: &mut AppContext) -> io::Result<()> {
    let username = ask(prompt, "Enter username: ")?;
    if username.is_empty() {
        println!("{}", AuthError::EmptyUsername);
        return Ok(());
    }

    // Check before asking for the rest of the details
    match context.store.exists(&username) {
        Ok(true) => {
            println!("{}", AuthError::UsernameTaken(username));
            return Ok(());
        }
        Ok(false) => {}
        Err(e) => {
            println!("Error: {}", e);
            return Ok(());
        }
    }

    let password = ask_password(prompt, "Enter password: ")?;
    if !AuthGate::is_valid_password(&password) {
        println!(
            "Password must contain at least one uppercase letter, one number or symbol, and be 6+ characters!"
        );
        return Ok(());
    }

    let email = ask(prompt, "Enter email: ")?;

    match context
        .gate
        .sign_up(&context.store, &username, &password, &email)
    {
        Ok(_) => println!("User registered successfully."),
        Err(e) => println!("Error: {}", e),
    }
    Ok(())
}

/// Interactive login; on success runs the dashboard until logout
pub fn handle_login(prompt: &mut dyn Prompt, context: &mut AppContext) -> io::Result<()> {
    let username = ask(prompt, "Enter username: ")?;

    // Locked accounts are refused before a password is requested
    if context.gate.is_locked(&username) {
        println!("{}", AuthError::Locked(username));
        return Ok(());
    }

    let password = ask_password(prompt, "Enter password: ")?;

    match context.gate.login(&context.store, &username, &password) {
        Ok(record) => {
            context.session.set_current_user(record);
            println!("Login successful. Welcome {}!", username);
            handle_dashboard(prompt, context)
        }
        Err(AuthError::Store(e)) => {
            println!("Error: {}", e);
            Ok(())
        }
        Err(e) => {
            println!("{}", e);
            Ok(())
        }
    }
}

/// Dashboard loop for the current session
pub fn handle_dashboard(prompt: &mut dyn Prompt, context: &mut AppContext) -> io::Result<()> {
    loop {
        let account = match context.session.current_user_mut() {
            Some(account) => account,
            None => {
                println!("No active session!");
                return Ok(());
            }
        };

        show_dashboard_options(&account.username);
        let choice = ask(prompt, "Choose an option: ")?;

        match choice.as_str() {
            "1" => {
                println!("\n*== User Profile ==*");
                println!("Username: {}", account.username);
                println!("Email: {}", account.email);
                println!("Assets: {}", account.assets().len());
            }
            "2" => handle_add_asset(prompt, account)?,
            "3" => show_portfolio(account),
            "4" => handle_asset_editor(prompt, &context.store, account)?,
            "5" => show_zakat(account, &context.zakat),
            "6" => {
                let username = account.username.clone();
                handle_bank_link(prompt, &username)?;
            }
            "7" => {
                report_logout(context.session.logout(&context.store));
                return Ok(());
            }
            _ => println!("Invalid option!"),
        }
    }
}

fn report_logout(outcome: LogoutOutcome) {
    match outcome {
        LogoutOutcome::Saved(_) => {
            println!("User data saved successfully.");
            println!("Logged out successfully.");
        }
        LogoutOutcome::SaveFailed { error, .. } => {
            println!("Error saving user data: {}", error);
            println!("Logged out.");
        }
        LogoutOutcome::NoActiveSession => {}
    }
}
