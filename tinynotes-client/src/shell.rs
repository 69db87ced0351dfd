use std::io;
use std::io::BufRead;

use tokio::runtime::Runtime;

use crate::editor::{CommitOutcome, EditorSession};
use crate::list::summary_line;
use crate::note_ref::NoteRef;
use crate::store::NoteStore;

/// Where the user currently is. Leaving `Editor` is the only thing that
/// commits pending edits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Route {
    List,
    Editor(NoteRef),
    Quit,
}

pub struct Shell<S: NoteStore> {
    store: S,
    runtime: Runtime,
}

impl<S: NoteStore> Shell<S> {
    pub fn new(store: S, runtime: Runtime) -> Self {
        Shell { store, runtime }
    }

    pub fn run(&self, start: Option<NoteRef>) -> io::Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut route = match start {
            Some(target) => Route::Editor(target),
            None => Route::List,
        };
        loop {
            route = match route {
                Route::List => self.run_list(&mut input)?,
                Route::Editor(target) => self.run_editor(&mut input, target)?,
                Route::Quit => return Ok(()),
            };
        }
    }

    fn run_list(&self, input: &mut impl BufRead) -> io::Result<Route> {
        match self.runtime.block_on(self.store.fetch_all()) {
            Ok(notes) => {
                println!("Notes ({})", notes.len());
                for (i, note) in notes.iter().enumerate() {
                    println!("{:>3}  {}", i + 1, summary_line(note));
                }
                println!("[number] open | n new | r refresh | q quit");
                loop {
                    let Some(line) = read_line(input)? else {
                        return Ok(Route::Quit);
                    };
                    let line = line.trim();
                    match line {
                        "q" => return Ok(Route::Quit),
                        "n" => return Ok(Route::Editor(NoteRef::New)),
                        "r" => return Ok(Route::List),
                        _ => match line.parse::<usize>() {
                            Ok(i) if (1..=notes.len()).contains(&i) => {
                                return Ok(
                                    Route::Editor(
                                        NoteRef::Existing(notes[i - 1].id)
                                    )
                                );
                            },
                            _ => println!("unrecognized command: {line}"),
                        },
                    }
                }
            },
            Err(e) => {
                println!("cannot load the note list: {e}");
                println!("r retry | q quit");
                loop {
                    let Some(line) = read_line(input)? else {
                        return Ok(Route::Quit);
                    };
                    match line.trim() {
                        "q" => return Ok(Route::Quit),
                        "r" => return Ok(Route::List),
                        other => println!("unrecognized command: {other}"),
                    }
                }
            },
        }
    }

    fn run_editor(
        &self,
        input: &mut impl BufRead,
        target: NoteRef,
    ) -> io::Result<Route> {
        let mut session =
            match self.runtime.block_on(EditorSession::open(&self.store, target)) {
                Ok(session) => session,
                Err(e) => {
                    println!("cannot open note {target}: {e}");
                    return Ok(Route::List);
                },
            };

        match target {
            NoteRef::New => println!("-- new note --"),
            NoteRef::Existing(id) => println!("-- note {id} --"),
        }
        if !session.body().is_empty() {
            println!("{}", session.body());
        }
        print!("type to append | :done save and go back | :clear wipe the text");
        if !target.is_new() {
            print!(" | :delete");
        }
        println!();

        loop {
            let Some(line) = read_line(input)? else {
                // end of input leaves the editor, which is what commits
                self.commit_and_describe(&session);
                return Ok(Route::Quit);
            };
            match line.trim_end() {
                ":done" | ":back" => {
                    // navigation is gated on the commit: a failure keeps
                    // the editor open instead of silently losing the edit
                    match self.runtime.block_on(session.commit()) {
                        Ok(outcome) => {
                            describe_outcome(&outcome);
                            return Ok(Route::List);
                        },
                        Err(e) => {
                            println!("could not save: {e}");
                            println!("still in the editor; :done to retry");
                        },
                    }
                },
                ":delete" if !target.is_new() => {
                    match self.runtime.block_on(session.delete()) {
                        Ok(outcome) => {
                            describe_outcome(&outcome);
                            return Ok(Route::List);
                        },
                        Err(e) => println!("could not delete: {e}"),
                    }
                },
                ":clear" => session.set_body(""),
                line if line.starts_with(':') =>
                    println!("unrecognized command: {line}"),
                line => {
                    // the mirror of typing into a text area: the draft body
                    // is replaced wholesale with the grown text
                    let mut body = session.body().to_owned();
                    if !body.is_empty() {
                        body.push('\n');
                    }
                    body.push_str(line);
                    session.set_body(body);
                },
            }
        }
    }

    fn commit_and_describe(&self, session: &EditorSession<'_, S>) {
        match self.runtime.block_on(session.commit()) {
            Ok(outcome) => describe_outcome(&outcome),
            Err(e) => println!("could not save: {e}"),
        }
    }
}

fn describe_outcome(outcome: &CommitOutcome) {
    match outcome {
        CommitOutcome::Created(note) => println!("created note {}", note.id),
        CommitOutcome::Updated(note) => println!("saved note {}", note.id),
        CommitOutcome::Deleted => println!("note deleted"),
        CommitOutcome::Skipped => println!("nothing to save"),
    }
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
