// src/modules/portfolio/user_interface.rs
use std::io;

use super::model::{parse_asset_value, parse_selection, Asset};
use super::valuation::{format_amount, total_value};
use super::zakat::ZakatPolicy;
use crate::modules::auth::store::{AccountRecord, AccountStore};
use crate::modules::utils::io::{ask, confirm, Prompt};
use crate::modules::utils::logging::log_data_operation;

/// Add a holding to the in-session account. It reaches the store on logout.
pub fn handle_add_asset(prompt: &mut dyn Prompt, account: &mut AccountRecord) -> io::Result<()> {
    let name = ask(prompt, "Enter asset name: ")?;
    let raw_value = ask(prompt, "Enter asset value: ")?;

    let asset = match parse_asset_value(&raw_value).and_then(|value| Asset::new(name, value)) {
        Ok(asset) => asset,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    log_data_operation("add", &account.username, asset.name(), true, None);
    account.add_asset(asset);
    println!("Asset added successfully.");
    Ok(())
}

pub fn show_portfolio(account: &AccountRecord) {
    println!("\n*== Portfolio ==*");
    if account.assets().is_empty() {
        println!("No assets yet.");
        return;
    }
    for asset in account.assets() {
        println!("{}", asset);
    }
    println!("Total Portfolio Value: ${}", format_amount(total_value(account)));
}

/// Edit the value of a holding or remove it, then save through the store.
/// Save failures are logged and the in-memory change is kept.
pub fn handle_asset_editor(
    prompt: &mut dyn Prompt,
    store: &AccountStore,
    account: &mut AccountRecord,
) -> io::Result<()> {
    if account.assets().is_empty() {
        println!("No assets to edit or remove.");
        return Ok(());
    }

    println!("\n*== Edit/Remove Assets ==*");
    for (i, asset) in account.assets().iter().enumerate() {
        println!("{}. {} - ${}", i + 1, asset.name(), format_amount(asset.value()));
    }

    let selection = ask(prompt, "Select an asset by number: ")?;
    let index = match parse_selection(&selection, account.assets().len()) {
        Ok(index) => index,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    println!("Choose action:");
    println!("1. Edit Value");
    println!("2. Remove Asset");
    let action = ask(prompt, "Enter option: ")?;

    if !confirm(prompt, "Confirm action?")? {
        println!("Operation cancelled.");
        return Ok(());
    }

    match action.as_str() {
        "1" => {
            let raw_value = ask(prompt, "Enter new asset value: ")?;
            let result =
                parse_asset_value(&raw_value).and_then(|value| account.replace_asset_value(index, value));
            match result {
                Ok(()) => {
                    save_after_edit(store, account, "edit");
                    println!("Asset value updated successfully.");
                }
                Err(e) => println!("{}", e),
            }
        }
        "2" => match account.remove_asset(index) {
            Ok(removed) => {
                log::info!("Removed asset {}", removed.name());
                save_after_edit(store, account, "remove");
                println!("Asset removed successfully.");
            }
            Err(e) => println!("{}", e),
        },
        _ => println!("Invalid action selected."),
    }
    Ok(())
}

fn save_after_edit(store: &AccountStore, account: &AccountRecord, operation: &str) {
    if store.update_safe(account) {
        log_data_operation(operation, &account.username, "portfolio", true, None);
    } else {
        println!("[ERROR] Failed to update user data. Changes may not be saved permanently!");
    }
}

pub fn show_zakat(account: &AccountRecord, policy: &ZakatPolicy) {
    let total = total_value(account);

    println!("\n*== Zakat Calculation ==*");
    println!("Total Portfolio Value: ${}", format_amount(total));
    println!(
        "Nisab Threshold: ${} (gold at ${}/g)",
        format_amount(policy.nisab_threshold()),
        format_amount(policy.gold_price_per_gram())
    );

    if policy.is_applicable(total) {
        println!("Zakat Due (2.5%): ${}", format_amount(policy.zakat_due(total)));
    } else {
        println!("Zakat is not applicable (portfolio below Nisab).");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::encryption::Credential;
    use crate::modules::utils::io::ScriptedPrompt;
    use tempfile::TempDir;

    fn setup() -> (AccountStore, AccountRecord, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = AccountStore::new(dir.path().join("users_list.json"));
        let mut account = AccountRecord::new(
            "alice".to_string(),
            Credential::derive("Abcdef1", 1),
            "alice@example.com".to_string(),
        );
        account.add_asset(Asset::new("Gold", 100.0).unwrap());
        account.add_asset(Asset::new("AAPL", 250.5).unwrap());
        store.insert(account.clone()).unwrap();
        (store, account, dir)
    }

    #[test]
    fn test_add_asset_is_in_memory_only() {
        let (store, mut account, _dir) = setup();
        let mut prompt = ScriptedPrompt::new(["Bitcoin", "1500.75"]);

        handle_add_asset(&mut prompt, &mut account).unwrap();
        assert_eq!(account.assets().len(), 3);
        assert_eq!(account.assets()[2].name(), "Bitcoin");

        let stored = store.find_by_username("alice").unwrap().unwrap();
        assert_eq!(stored.assets().len(), 2);
    }

    #[test]
    fn test_add_asset_rejects_bad_value() {
        let (_store, mut account, _dir) = setup();
        let mut prompt = ScriptedPrompt::new(["Bitcoin", "lots"]);

        handle_add_asset(&mut prompt, &mut account).unwrap();
        assert_eq!(account.assets().len(), 2);
    }

    #[test]
    fn test_edit_value_is_saved() {
        let (store, mut account, _dir) = setup();
        let mut prompt = ScriptedPrompt::new(["2", "1", "yes", "300"]);

        handle_asset_editor(&mut prompt, &store, &mut account).unwrap();

        let stored = store.find_by_username("alice").unwrap().unwrap();
        assert_eq!(stored.assets()[1].name(), "AAPL");
        assert_eq!(stored.assets()[1].value(), 300.0);
        assert_eq!(stored, account);
    }

    #[test]
    fn test_remove_is_saved() {
        let (store, mut account, _dir) = setup();
        let mut prompt = ScriptedPrompt::new(["1", "2", "YES"]);

        handle_asset_editor(&mut prompt, &store, &mut account).unwrap();

        let stored = store.find_by_username("alice").unwrap().unwrap();
        assert_eq!(stored.assets().len(), 1);
        assert_eq!(stored.assets()[0].name(), "AAPL");
    }

    #[test]
    fn test_cancelled_or_invalid_edits_change_nothing() {
        let (store, mut account, _dir) = setup();
        let before = account.clone();

        // Declined confirmation
        let mut prompt = ScriptedPrompt::new(["1", "2", "no"]);
        handle_asset_editor(&mut prompt, &store, &mut account).unwrap();
        // Out-of-range selection stops before asking for an action
        let mut prompt = ScriptedPrompt::new(["9"]);
        handle_asset_editor(&mut prompt, &store, &mut account).unwrap();
        // Unknown action
        let mut prompt = ScriptedPrompt::new(["1", "7", "yes"]);
        handle_asset_editor(&mut prompt, &store, &mut account).unwrap();
        // Non-numeric new value
        let mut prompt = ScriptedPrompt::new(["1", "1", "yes", "abc"]);
        handle_asset_editor(&mut prompt, &store, &mut account).unwrap();

        assert_eq!(account, before);
        assert_eq!(store.find_by_username("alice").unwrap().unwrap(), before);
    }

    #[test]
    fn test_edit_survives_save_failure() {
        let dir = TempDir::new().unwrap();
        // Account was never inserted, so the safe update fails
        let store = AccountStore::new(dir.path().join("users_list.json"));
        let mut account = AccountRecord::new(
            "ghost".to_string(),
            Credential::derive("Abcdef1", 1),
            String::new(),
        );
        account.add_asset(Asset::new("Gold", 1.0).unwrap());

        let mut prompt = ScriptedPrompt::new(["1", "1", "yes", "2"]);
        handle_asset_editor(&mut prompt, &store, &mut account).unwrap();

        assert_eq!(account.assets()[0].value(), 2.0);
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_empty_portfolio_editor_reads_nothing() {
        let (store, _account, _dir) = setup();
        let mut empty = AccountRecord::new(
            "bob".to_string(),
            Credential::derive("Abcdef1", 1),
            String::new(),
        );
        let mut prompt = ScriptedPrompt::new(["1"]);

        handle_asset_editor(&mut prompt, &store, &mut empty).unwrap();
        assert_eq!(prompt.remaining(), 1);
    }
}
