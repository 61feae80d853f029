#![no_main]

use libfuzzer_sys::fuzz_target;
use xwiki_weblate_helpers::XmlFile;
use xwiki_weblate_helpers_fuzz::{apply_edits, TagEdit};

fuzz_target!(|inputs: (&str, Vec<TagEdit>, String)| {
    let (document, edits, content) = inputs;
    let mut xml = XmlFile::new(document);
    apply_edits(&mut xml, &edits);
    let _ = XmlFile::create_translation(&xml, "fr");
    xml.set_tag_content("content", &content);
    assert_eq!(xml.get_tag_content("content"), content.trim());
});
