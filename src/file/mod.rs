#![doc = r#"
Chunk level reading of a Standard MIDI File

```text
[Header Chunk: "MThd", length 6, format, track count, division]
[Track Chunk 1: "MTrk", length n, n bytes of events]
...
[Track Chunk N: "MTrk", length n, n bytes of events]
```

[`read_header_chunk`] and [`read_track_chunk`] read one chunk each from a
[`Reader`](crate::reader::Reader). [`load`] drives them for a whole file and
hands every track to the [`TrackDecoder`](crate::track::TrackDecoder).
"#]

mod header;
pub use header::*;

mod track_chunk;
pub use track_chunk::*;

mod options;
pub use options::*;

mod error;
pub use error::*;

mod loader;
pub use loader::*;
