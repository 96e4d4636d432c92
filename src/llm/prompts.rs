use crate::llm::client::ChatMessage;
use crate::summary::Preferences;

/// Fixed system instruction sent with every request.
pub const SYSTEM_PROMPT: &str = "You are a clinical assistant that produces structured, \
professional summaries of therapy session notes. Follow user preferences carefully.";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Render the user instruction from preferences and (possibly masked) notes.
pub fn build_user_prompt(prefs: &Preferences, notes: &str) -> String {
    format!(
        "Session Type: {session_type}\n\
Tone: {tone}\n\
Summary Length: {summary_length}\n\
Include Action Items: {action_items}\n\
Anonymize Data: {anonymize}\n\
\n\
Notes:\n\
{notes}\n",
        session_type = prefs.session_type,
        tone = prefs.tone,
        summary_length = prefs.summary_length,
        action_items = yes_no(prefs.include_action_items),
        anonymize = yes_no(prefs.anonymize_data),
        notes = notes.trim(),
    )
}

/// Build the system/user message pair for a summary request.
pub fn build_summary_messages(prefs: &Preferences, notes: &str) -> [ChatMessage; 2] {
    [
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(build_user_prompt(prefs, notes)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::Role;

    fn prefs() -> Preferences {
        Preferences {
            tone: "Empathetic".to_string(),
            include_action_items: true,
            anonymize_data: false,
            session_type: "Individual".to_string(),
            summary_length: "Brief".to_string(),
        }
    }

    #[test]
    fn user_prompt_renders_every_preference() {
        let prompt = build_user_prompt(&prefs(), "  Client discussed work stress.  \n");
        assert_eq!(
            prompt,
            "Session Type: Individual\n\
Tone: Empathetic\n\
Summary Length: Brief\n\
Include Action Items: Yes\n\
Anonymize Data: No\n\
\n\
Notes:\n\
Client discussed work stress.\n"
        );
    }

    #[test]
    fn unrecognised_values_pass_through() {
        let mut prefs = prefs();
        prefs.tone = "pirate {shanty}".to_string();
        prefs.include_action_items = false;
        let prompt = build_user_prompt(&prefs, "x");
        assert!(prompt.contains("Tone: pirate {shanty}\n"));
        assert!(prompt.contains("Include Action Items: No\n"));
    }

    #[test]
    fn messages_are_system_then_user() {
        let [system, user] = build_summary_messages(&prefs(), "notes");
        assert_eq!(system.role, Role::System);
        assert_eq!(system.content, SYSTEM_PROMPT);
        assert_eq!(user.role, Role::User);
        assert!(user.content.ends_with("Notes:\nnotes\n"));
    }
}
