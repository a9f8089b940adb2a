fn main() {
    // Bundles templates/ into the binary for release builds
    minijinja_embed::embed_templates!("templates");
}
