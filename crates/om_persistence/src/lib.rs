pub mod map_io;

pub use map_io::{
    definition_filename, definition_path, ensure_maps_dir, list_definitions, load_definition,
    save_definition, MapIoError, MAPS_DIR,
};
