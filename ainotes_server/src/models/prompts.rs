use ainotes::Message;
use std::fmt;

pub const ENHANCE_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that formats and enhances study notes.";

pub trait SystemPrompt: fmt::Display {
    /// System instruction followed by this prompt as the user message.
    fn to_messages(&self, system: &str) -> Vec<Message> {
        vec![Message::system(system), Message::user(self.to_string())]
    }
}

impl<T: fmt::Display> SystemPrompt for T {}

/// Instructions for rewriting a note as well-structured Markdown.
pub struct EnhancePrompt<'a> {
    pub category: &'a str,
    pub content: &'a str,
}

impl fmt::Display for EnhancePrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules = concat!(
            "🧾 **Instruction**:\n",
            "You're an intelligent assistant specialized in improving study notes. ",
            "Enhance the clarity, formatting, and structure of the note below. ",
            "Follow these rules strictly:\n",
            "\n",
            "1. 📝 Format everything using **Markdown**.\n",
            "2. 📌 Use `#`, `##`, `###` for headings and subheadings.\n",
            "3. ✅ Use bullet points (`-`) or numbered lists where needed.\n",
            "4. 💡 Bold key terms or definitions using `**` for quick scanning.\n",
            "5. 🔍 Insert emojis (✅, 💡, ❗, 📘, 🔢) to guide the reader.\n",
        );
        write!(
            f,
            "📚 **Category**: {}\n\n{rules}\n---\n\n🔤 **Original Note**:\n{}\n",
            self.category, self.content
        )
    }
}

/// Prompt built from the text of an uploaded PDF.
pub struct PdfNotesPrompt<'a> {
    pub category: &'a str,
    pub ai_category: &'a str,
    pub text: &'a str,
}

impl fmt::Display for PdfNotesPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Category: {}\nAI Category: {}\n\n{}\n\nSummarize or convert this content to notes:",
            self.category, self.ai_category, self.text
        )
    }
}
