//! Tests for JSON persistence of tile sets and libraries

#[cfg(test)]
mod tests {
    use socketwfc::AlgorithmError;
    use socketwfc::io::library::{load_library, load_tiles, save_library, write_json};
    use socketwfc::rules::compiler::compile;
    use socketwfc::rules::faces::{FaceLabel, Faces};
    use socketwfc::rules::library::TileDefinition;
    use std::fs;
    use tempfile::TempDir;

    const TILE: &str = r#"{
        "id": "wall",
        "faces": {
            "up": "air", "down": "ground", "left": "building",
            "right": "building", "forward": "road", "back": "air"
        }
    }"#;

    // Tests both the bare and wrapped tile set layouts
    // Verified by removing the Wrapped variant
    #[test]
    fn test_load_tiles_layouts() {
        let dir = TempDir::new().unwrap();
        let bare = dir.path().join("bare.json");
        let wrapped = dir.path().join("wrapped.json");
        fs::write(&bare, format!("[{TILE}]")).unwrap();
        fs::write(&wrapped, format!("{{\"tiles\": [{TILE}, {TILE}]}}")).unwrap();

        let tiles = load_tiles(&bare).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles.first().map(|tile| tile.faces.forward.clone()), Some(FaceLabel::ROAD));
        assert_eq!(load_tiles(&wrapped).unwrap().len(), 2);
    }

    // Tests unreadable and unparsable files are reported
    // Verified by mapping parse errors to FileSystem
    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_tiles(&missing),
            Err(AlgorithmError::FileSystem {
                operation: "open",
                ..
            })
        ));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{\"tiles\": 3}").unwrap();
        assert!(matches!(
            load_tiles(&broken),
            Err(AlgorithmError::LibraryLoad { .. })
        ));
    }

    // Tests a saved library loads back unchanged
    // Verified by skipping flush in write_json
    #[test]
    fn test_library_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.json");
        let mut faces = Faces::uniform(&FaceLabel::GROUND);
        faces.right = FaceLabel::ROAD;
        let library = compile(&[TileDefinition::new("lane", faces).with_payload("lane.glb")]);

        save_library(&library, &path).unwrap();
        let loaded = load_library(&path).unwrap();
        assert_eq!(loaded, library);
        assert_eq!(loaded.find("lane_2"), Some(2));
    }

    // Tests libraries with dangling neighbour indices are refused
    // Verified by deserializing the adjacency table without validation
    #[test]
    fn test_malformed_library_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        let json = r#"{
            "variants": [{
                "source_id": "a", "rotation": 0,
                "faces": {"up": "x", "down": "x", "left": "x", "right": "x", "forward": "x", "back": "x"}
            }],
            "rules": {"modules": [{"up": [4], "down": [], "left": [], "right": [], "forward": [], "back": []}]}
        }"#;
        fs::write(&path, json).unwrap();

        match load_library(&path) {
            Err(AlgorithmError::LibraryLoad { source, .. }) => {
                assert!(source.to_string().contains("neighbour 4"));
            }
            other => panic!("expected LibraryLoad, got {other:?}"),
        }
    }

    // Tests writing into a missing directory fails cleanly
    // Verified by unwrapping File::create
    #[test]
    fn test_write_json_bad_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out.json");
        assert!(matches!(
            write_json(&vec![1, 2, 3], &path),
            Err(AlgorithmError::FileSystem {
                operation: "create",
                ..
            })
        ));
    }
}
