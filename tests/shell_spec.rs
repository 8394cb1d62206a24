//! Menu loop tests.
//!
//! Most cases drive `shell::run` through an in-memory console. The last
//! section spawns the `petshop` binary and feeds it a script over stdin.

use std::collections::VecDeque;
use std::io::{self, Cursor, Write};
use std::process::{Command, Stdio};

use pet_registry::console::shell::{self, INVALID_OPTION, MENU_PROMPT};
use pet_registry::console::{Console, LineConsole};
use pet_registry::intake::NAME_PROMPT;
use pet_registry::registry::{Registry, EMPTY_MESSAGE};
use speculate2::speculate;

const REX: &str = "Dog: Name = Rex, Gender = Male, Owner = Alice, Breed = Labrador";

/// Runs the menu over `script` and returns everything it printed.
fn run_script(registry: &mut Registry, script: &str) -> String {
    let mut console = LineConsole::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    shell::run(&mut console, registry).expect("Shell failed");
    String::from_utf8(console.into_output()).expect("Transcript is not UTF-8")
}

/// Runs the menu over raw bytes, which need not be valid UTF-8.
fn run_bytes(registry: &mut Registry, script: &[u8]) -> String {
    let mut console = LineConsole::new(Cursor::new(script.to_vec()), Vec::new());
    shell::run(&mut console, registry).expect("Shell failed");
    String::from_utf8(console.into_output()).expect("Transcript is not UTF-8")
}

/// Scripted console that fails reads on one prompt and writes of one message.
struct FlakyConsole {
    answers: VecDeque<&'static str>,
    fail_prompt: Option<&'static str>,
    fail_say: Option<&'static str>,
    said: Vec<String>,
}

impl FlakyConsole {
    fn new(answers: &[&'static str]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            fail_prompt: None,
            fail_say: None,
            said: Vec::new(),
        }
    }
}

impl Console for FlakyConsole {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        if self.fail_prompt.is_some_and(|failing| failing == text) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin went away"));
        }
        Ok(self.answers.pop_front().map(str::to_string))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        if self.fail_say.is_some_and(|needle| text.contains(needle)) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
        }
        self.said.push(text.to_string());
        Ok(())
    }
}

/// Writer that refuses every write.
struct ClosedOutput;

impl Write for ClosedOutput {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

speculate! {
    before {
        let mut registry = Registry::new();
    }

    describe "menu" {
        it "shows the banner and exits on 3" {
            let output = run_script(&mut registry, "3\n");

            assert!(output.starts_with("Welcome to the Pet shop!\n"));
            assert!(output.contains("1. - Add a Pet\n"));
            assert!(output.contains("2. - List of all Pets\n"));
            assert!(output.contains("3. - Exit application\n"));
            assert!(output.ends_with(MENU_PROMPT));
            assert!(registry.is_empty());
        }

        it "rejects unknown options and shows the menu again" {
            let output = run_script(&mut registry, "9\nhello\n3\n");

            assert_eq!(output.matches(INVALID_OPTION).count(), 2);
            assert_eq!(output.matches(MENU_PROMPT).count(), 3);
        }

        it "accepts padded choices" {
            let output = run_script(&mut registry, "  2  \n 3\n");
            assert!(output.contains(EMPTY_MESSAGE));
        }

        it "treats undecodable input as an unknown option" {
            let output = run_bytes(&mut registry, b"\xff\n2\n3\n");

            assert!(output.contains(&format!("{}\n", INVALID_OPTION)));
            assert!(output.contains(EMPTY_MESSAGE));
            assert_eq!(output.matches(MENU_PROMPT).count(), 3);
        }

        it "ends normally when input runs out" {
            let output = run_script(&mut registry, "");
            assert_eq!(output.matches(MENU_PROMPT).count(), 1);
        }
    }

    describe "listing" {
        it "says there are no pets yet" {
            let output = run_script(&mut registry, "2\n3\n");
            assert!(output.contains(&format!("{}\n", EMPTY_MESSAGE)));
        }

        it "lists pets after they are added" {
            let script = "1\nDog\nMale\nRex\nAlice\nLabrador\ny\n\
                          1\nbird\nfemale\nTweety\nGranny\nYES\ny\n\
                          2\n3\n";

            let output = run_script(&mut registry, script);

            assert_eq!(registry.len(), 2);
            let listing = output.rsplit(MENU_PROMPT).nth(1).expect("Missing listing");
            assert!(listing.starts_with(&format!(
                "{}\nBird: Name = Tweety, Gender = Female, Owner = Granny, WillFly = True\n",
                REX
            )));
            assert!(!output.contains(EMPTY_MESSAGE));
        }
    }

    describe "add pet" {
        it "reports validation errors and returns to the menu" {
            let script = "1\nCat\nFemale\nTom\nBob\nmaybe\n2\n3\n";

            let output = run_script(&mut registry, script);

            assert!(output.contains("Invalid longhaired status. Please enter yes or no.\n"));
            assert!(output.contains(EMPTY_MESSAGE));
            assert!(registry.is_empty());
        }

        it "rejects an undecodable kind and keeps going" {
            let output = run_bytes(&mut registry, b"1\nD\xffg\n3\n");

            assert!(output.contains("Invalid pet kind. Please enter Dog, Cat, Lizard, or Bird.\n"));
            assert!(registry.is_empty());
        }

        it "reports a cancelled add" {
            let output = run_script(&mut registry, "1\nDog\nMale\nRex\nAlice\nLabrador\nn\n3\n");

            assert!(output.contains("The user has cancelled.\n"));
            assert!(registry.is_empty());
        }

        it "reports console faults as system errors and keeps going" {
            let mut console = FlakyConsole::new(&["1", "Dog", "Male", "3"]);
            console.fail_prompt = Some(NAME_PROMPT);

            shell::run(&mut console, &mut registry).expect("Shell failed");

            assert!(console.said.iter().any(|line| line.starts_with("System error: ")));
            assert!(registry.is_empty());
        }
    }

    describe "console failure" {
        it "ends the loop with an error when a rejection cannot be shown" {
            let mut console = FlakyConsole::new(&["1", "Fish", "3"]);
            console.fail_say = Some("Invalid pet kind");

            assert!(shell::run(&mut console, &mut registry).is_err());
            assert!(registry.is_empty());
            assert_eq!(console.answers, VecDeque::from(["3"]));
        }

        it "ends the loop with an error when output is gone" {
            let mut console = LineConsole::new(Cursor::new(b"3\n".to_vec()), ClosedOutput);

            assert!(shell::run(&mut console, &mut registry).is_err());
        }
    }

    describe "petshop binary" {
        it "runs a scripted session over stdio" {
            let mut child = Command::new(env!("CARGO_BIN_EXE_petshop"))
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .spawn()
                .expect("Failed to spawn petshop");

            child
                .stdin
                .take()
                .expect("Failed to get stdin")
                .write_all(b"1\nDog\nMale\nRex\nAlice\nLabrador\ny\n2\n3\n")
                .expect("Failed to write script");

            let result = child.wait_with_output().expect("Failed to wait for petshop");
            let stdout = String::from_utf8(result.stdout).expect("Stdout is not UTF-8");

            assert!(result.status.success());
            assert!(stdout.contains(&format!("The pet: {} has been added successfully!", REX)));
            assert!(stdout.contains(&format!("{}\n", REX)));
        }
    }
}
