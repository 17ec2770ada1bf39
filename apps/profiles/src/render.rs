use shared::domain::{character_label, Character};

/// Formats the bound `users` state for the terminal.
pub fn render_users(users: Option<&[Character]>, as_json: bool) -> anyhow::Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(&users)?);
    }

    let Some(users) = users else {
        return Ok("No characters loaded.".to_string());
    };

    if users.is_empty() {
        return Ok("No characters found.".to_string());
    }

    let lines: Vec<String> = users
        .iter()
        .enumerate()
        .map(|(idx, character)| format!("{:>3}. {}", idx + 1, character_label(character)))
        .collect();
    Ok(lines.join("\n"))
}
