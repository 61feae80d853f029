use arbitrary::Arbitrary;
use xwiki_weblate_helpers::XmlFile;

/// Wrapper enum for generating arbitrary edits of an XWiki document.
#[derive(Arbitrary, Debug)]
pub enum TagEdit {
    Set { tag: Tag, content: String },
    Remove(Tag),
    RemoveAll(Tag),
}

/// The tags touched when creating XWiki translations.
#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum Tag {
    Title,
    Content,
    Language,
    Object,
    Attachment,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Title => "title",
            Tag::Content => "content",
            Tag::Language => "language",
            Tag::Object => "object",
            Tag::Attachment => "attachment",
        }
    }
}

/// Apply the edits to `xml` in order.
pub fn apply_edits(xml: &mut XmlFile, edits: &[TagEdit]) {
    for edit in edits {
        match edit {
            TagEdit::Set { tag, content } => xml.set_tag_content(tag.name(), content),
            TagEdit::Remove(tag) => {
                xml.remove_tag(tag.name());
            }
            TagEdit::RemoveAll(tag) => xml.remove_all_tags(tag.name()),
        }
    }
}
