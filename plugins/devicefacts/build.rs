fn main() {
    tauri_plugin::Builder::new(&[
        "carrier_name",
        "preferred_languages",
        "current_locale",
        "advertising_id",
    ])
    .build();
}
