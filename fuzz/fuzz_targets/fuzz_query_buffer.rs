//! Fuzz the query buffer with arbitrary edit sequences.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift_engine::QueryBuffer;

#[derive(Debug, Arbitrary)]
enum Edit {
    Insert(char),
    Paste(String),
    DeleteBefore,
    DeleteAt,
    Left,
    Right,
}

fuzz_target!(|edits: Vec<Edit>| {
    let mut query = QueryBuffer::default();
    for edit in edits {
        match edit {
            Edit::Insert(c) => {
                query.insert(c);
            }
            Edit::Paste(payload) => {
                query.paste(&payload);
            }
            Edit::DeleteBefore => {
                query.delete_before();
            }
            Edit::DeleteAt => {
                query.delete_at();
            }
            Edit::Left => {
                query.move_left();
            }
            Edit::Right => {
                query.move_right();
            }
        }

        // The cursor must stay a valid char boundary inside the text.
        let cursor = query.cursor();
        assert!(cursor <= query.text().len());
        assert!(query.text().is_char_boundary(cursor));
        // Inserts refuse control characters and paste strips them, so
        // none can ever reach the buffer.
        assert!(!query.text().chars().any(char::is_control));
    }
});
