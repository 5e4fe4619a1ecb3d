// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_literate_document(sections: usize) -> String {
    let mut content = String::from("# Generated\n\n```c\n<<file:out.c>>=\n");
    for section in 0..sections {
        content.push_str(&format!("<<section {section}>>\n"));
    }
    content.push_str("```\n\n");

    for section in 0..sections {
        content.push_str(&format!(
            "## Section {section}\n\nProse with *emphasis*, `code` and a [link](http://example.com/{section}).\n\n\
             ```c\n<<section {section}>>=\nint value_{section} = {section} << 2;\n<<helper>>\n```\n\n"
        ));
    }
    content.push_str("```c\n<<helper>>=\nif (a < b && c > d) { return; }\n```\n");
    content
}
