//! Interactive chat demo against the FitCoach library

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use fitcoach::api::ApiClient;
use fitcoach::tools::chat::{self, ConversationState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api = ApiClient::from_env();
    if !api.has_key() {
        println!("No API_NINJAS_KEY set; nutrition and exercise answers use the built-in catalog.");
    }

    let conversation = Mutex::new(ConversationState::default());

    println!("FitCoach chat demo. Type a message, or 'quit' to exit.");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = chat::process_message(&api, &conversation, line).await;
        println!("\n[{}]\n{}\n", reply.intent, reply.reply);
    }

    Ok(())
}
