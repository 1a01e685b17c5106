use hymnlist_common::*;
use std::fs::File;
use std::io::Write;

use rmp_serde::Serializer;
use serde::ser::Serialize;

fn main()
{
  let program = HymnProgram::new(vec![
    HymnReference {
      number: "341a".to_string(),
      category: Some("Alkuvirsi".to_string()),
      verses: None,
    },
    HymnReference {
      number: "577".to_string(),
      category: Some("Päivän virsi".to_string()),
      verses: Some(VerseSelection {
        indices: vec![0, 4, 5, 6],
        display_text: "1,5-7".to_string(),
      }),
    },
  ]);
  let mut result: Vec<u8> = Vec::new();
  program.serialize(&mut Serializer::new(&mut result)).unwrap();
  let mut file = File::create("program.mp").unwrap();
  file.write_all(&result).unwrap();
}
