#![no_main]

use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use xwiki_weblate_helpers::PropertiesFile;

fuzz_target!(|inputs: (&str, &str)| {
    let (document, translation) = inputs;
    let mut properties = PropertiesFile::parse(document);
    properties.replace_with(&PropertiesFile::parse(translation));
    properties.filter_import();

    properties.filter_export();
    let exported = properties.document.clone();
    properties.filter_export();
    assert_eq!(properties.document, exported);
});
