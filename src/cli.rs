// Copyright 2026 The organizei Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::stdout;

use clap::Parser;
use organizei_core::Timestamp;
use organizei_core::error::Fallible;

use crate::cmd::OutputFormat;
use crate::cmd::add::NewFlashcard;
use crate::cmd::add::add_flashcard;
use crate::cmd::delete::delete_flashcard;
use crate::cmd::due::list_due;
use crate::cmd::edit::FlashcardEdit;
use crate::cmd::edit::edit_flashcard;
use crate::cmd::history::print_history;
use crate::cmd::list::list_flashcards;
use crate::cmd::review::review_flashcard;
use crate::cmd::show::show_flashcard;
use crate::db::FlashcardId;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Create a flashcard. It is due immediately.
    Add {
        /// The card (study topic) the flashcard belongs to.
        card_id: String,
        /// The question side.
        #[arg(long)]
        front: String,
        /// The answer side.
        #[arg(long)]
        back: String,
        /// A tag. May be given more than once.
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Path to the collection directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Change the content of a flashcard. Its schedule is kept.
    Edit {
        id: FlashcardId,
        /// The new question side.
        #[arg(long)]
        front: Option<String>,
        /// The new answer side.
        #[arg(long)]
        back: Option<String>,
        /// Replace the tags. May be given more than once.
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Remove all tags.
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
        /// Path to the collection directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Print a flashcard with its schedule.
    Show {
        id: FlashcardId,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Path to the collection directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
    /// List flashcards and their next review dates.
    List {
        /// Only list the flashcards of this card.
        #[arg(long)]
        card_id: Option<String>,
        /// Path to the collection directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Show the flashcards of a card that are due by the end of today.
    Due {
        card_id: String,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Path to the collection directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Grade a flashcard from 0 (total blackout) to 5 (perfect recall).
    Review {
        id: FlashcardId,
        #[arg(allow_hyphen_values = true)]
        grade: String,
        /// Path to the collection directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Print the review history of a flashcard.
    History {
        id: FlashcardId,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Path to the collection directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Delete a flashcard and its review history.
    Delete {
        id: FlashcardId,
        /// Path to the collection directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    let mut out = stdout().lock();
    match cli {
        Command::Add {
            card_id,
            front,
            back,
            tags,
            directory,
        } => {
            let new = NewFlashcard {
                card_id,
                front,
                back,
                tags,
            };
            add_flashcard(directory, new, Timestamp::now(), &mut out).map(|_| ())
        }
        Command::Edit {
            id,
            front,
            back,
            tags,
            clear_tags,
            directory,
        } => {
            let tags: Option<Vec<String>> = if clear_tags {
                Some(Vec::new())
            } else if tags.is_empty() {
                None
            } else {
                Some(tags)
            };
            let edit = FlashcardEdit { front, back, tags };
            edit_flashcard(directory, id, edit, &mut out).map(|_| ())
        }
        Command::Show {
            id,
            format,
            directory,
        } => show_flashcard(directory, id, format, &mut out).map(|_| ()),
        Command::List { card_id, directory } => list_flashcards(directory, card_id, &mut out),
        Command::Due {
            card_id,
            format,
            directory,
        } => list_due(directory, card_id, Timestamp::now(), format, &mut out).map(|_| ()),
        Command::Review {
            id,
            grade,
            directory,
        } => review_flashcard(directory, id, grade, Timestamp::now(), &mut out).map(|_| ()),
        Command::History {
            id,
            format,
            directory,
        } => print_history(directory, id, format, &mut out),
        Command::Delete { id, directory } => delete_flashcard(directory, id, &mut out),
    }
}
