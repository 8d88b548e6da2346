//! Interactive loop: a plain line is one analyze action, slash commands are
//! the explicit event handlers for everything else (page switch, language,
//! history, samples). Each handler reprints only the views that depend on
//! the state it changed.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::client::{self, AnalyzeOutcome, ApiClient, ClassifyError};
use crate::i18n::{self, Lang};
use crate::session::{Page, Session};
use crate::view;

pub struct Repl {
    editor: DefaultEditor,
    client: ApiClient,
    session: Session,
    history_path: std::path::PathBuf,
}

impl Repl {
    pub fn new(client: ApiClient, session: Session) -> Result<Self> {
        let editor = DefaultEditor::new()?;

        // Readline history (typed lines), not the analysis history.
        let history_path = dirs::home_dir()
            .unwrap_or_default()
            .join(".sentiscope")
            .join("input_history");

        Ok(Self {
            editor,
            client,
            session,
            history_path,
        })
    }

    fn load_history(&mut self) {
        if self.history_path.exists() {
            let _ = self.editor.load_history(&self.history_path);
        }
    }

    fn save_history(&mut self) {
        if let Some(parent) = self.history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = self.editor.save_history(&self.history_path);
    }

    pub async fn run(&mut self) -> Result<()> {
        self.load_history();

        view::banner(self.session.labels());
        println!("Type text to analyze it (Ctrl+D to exit, /help for commands)");
        println!();

        loop {
            match self.editor.readline(">>> ") {
                Ok(line) => {
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(&line)?;

                    let trimmed = line.trim();
                    if trimmed.starts_with('/') {
                        if !self.handle_command(trimmed).await {
                            break;
                        }
                        continue;
                    }

                    self.analyze(&line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error: {err:?}");
                    break;
                }
            }
        }

        self.save_history();
        Ok(())
    }

    /// One user-initiated analyze action: exactly one request, no automatic
    /// retries. Only a successful response touches the history.
    async fn analyze(&mut self, input: &str) {
        let labels = self.session.labels();

        if !input.trim().is_empty() {
            println!("{}", labels.analyzing);
        }
        match client::analyze(&self.client, &mut self.session, input).await {
            AnalyzeOutcome::EmptyInput => println!("{}", labels.warning_empty),
            AnalyzeOutcome::Classified(classification) => {
                view::result(labels, &classification, input.split_whitespace().count())
            }
            AnalyzeOutcome::Failed(ClassifyError::Timeout) => {
                println!("{}", labels.error_timeout)
            }
            AnalyzeOutcome::Failed(ClassifyError::Connection(_)) => {
                println!("{}", labels.error_connection)
            }
            AnalyzeOutcome::Failed(ClassifyError::Status(_)) => {
                println!("{}", labels.error_server)
            }
            AnalyzeOutcome::Failed(err @ ClassifyError::Transport(_)) => println!("{err}"),
        }
    }

    /// Returns `false` when the REPL should exit.
    async fn handle_command(&mut self, cmd: &str) -> bool {
        let mut parts = cmd.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        let labels = self.session.labels();

        match name {
            "/help" => {
                println!("Commands:");
                println!("  /analysis       - Switch to the analysis page");
                println!("  /dashboard      - Switch to the dashboard and render it");
                println!("  /history        - List the analysis history");
                println!("  /clear          - Clear the analysis history");
                println!("  /lang <code>    - Switch language (fr, en, es, ar)");
                println!("  /examples       - List sample sentences");
                println!("  /use <n>        - Analyze sample sentence n");
                println!("  /help           - Show this help");
                println!("  /quit           - Exit");
            }
            "/analysis" => {
                self.session.page = Page::Analysis;
                println!("== {} ==", labels.analysis);
            }
            "/dashboard" => {
                self.session.page = Page::Dashboard;
                view::dashboard(labels, &self.session.history);
            }
            "/history" => view::history_list(labels, &self.session.history),
            "/clear" => {
                self.session.clear_history();
                println!("{}", labels.history_cleared);
            }
            "/lang" => match arg.map(str::parse::<Lang>) {
                Some(Ok(lang)) => {
                    self.session.language = lang;
                    let labels = self.session.labels();
                    println!("{} : {}", labels.language, lang.native_name());
                }
                Some(Err(e)) => println!("{e}"),
                None => {
                    println!("{} :", labels.language);
                    for lang in Lang::ALL {
                        println!("  {}  {}", lang.code(), lang.native_name());
                    }
                }
            },
            "/examples" => {
                view::examples_list(labels, i18n::examples(self.session.language))
            }
            "/use" => {
                let examples = i18n::examples(self.session.language);
                match arg.and_then(|n| n.parse::<usize>().ok()) {
                    Some(n) if (1..=examples.len()).contains(&n) => {
                        let text = examples[n - 1].to_string();
                        println!(">>> {text}");
                        self.analyze(&text).await;
                    }
                    _ => println!("/use expects a number between 1 and {}", examples.len()),
                }
            }
            "/quit" | "/exit" => return false,
            _ => println!("Unknown command: {name} (try /help)"),
        }

        true
    }
}
