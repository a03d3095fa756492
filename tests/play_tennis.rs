use id3tree::statistics::{entropy, gain};
use id3tree::{make_tree, Dataset, Row, Tree, TreeBuilder, Value};
use serde_json::json;
use std::error::Error;
use std::fs;

fn load_play_tennis() -> Result<Dataset, Box<dyn Error>> {
    let file = fs::read_to_string("resources/play_tennis.csv")?;
    let mut lines = file.lines();
    let header: Vec<&str> = lines.next().ok_or("empty file")?.split(',').collect();
    let rows: Vec<Row> = lines
        .filter(|l| !l.is_empty())
        .map(|l| l.split(',').map(Value::from).collect())
        .collect();
    Ok(Dataset::new(header, rows)?)
}

#[test]
fn test_root_gains() -> Result<(), Box<dyn Error>> {
    let data = load_play_tennis()?;
    let h = entropy(&data.schema, &data.rows, "Play")?;
    assert!((h - 0.940).abs() < 1e-3);

    let expected = [
        ("Outlook", 0.2467),
        ("Humidity", 0.1518),
        ("Wind", 0.0481),
        ("Temperature", 0.0292),
    ];
    for (attr, g) in expected {
        let actual = gain(&data.schema, &data.rows, attr, "Play")?;
        assert!((actual - g).abs() < 1e-4, "{}: {} != {}", attr, actual, g);
    }
    Ok(())
}

#[test]
fn test_play_tennis_tree() -> Result<(), Box<dyn Error>> {
    let data = load_play_tennis()?;
    let tree = TreeBuilder::default().fit(&data, "Play")?;

    assert_eq!(tree.split_attribute(), Some("Outlook"));
    assert_eq!(tree.child(&Value::from("Overcast")), Some(&Tree::Leaf(Value::from("Yes"))));
    assert_eq!(
        tree.to_json_value(),
        json!({
            "Outlook": {
                "Overcast": "Yes",
                "Rain": {"Wind": {"Strong": "No", "Weak": "Yes"}},
                "Sunny": {"Humidity": {"High": "No", "Normal": "Yes"}}
            }
        })
    );
    Ok(())
}

#[test]
fn test_play_tennis_deterministic() -> Result<(), Box<dyn Error>> {
    let data = load_play_tennis()?;
    let first = make_tree(&data.rows, &data.schema, "Play", 0)?;
    let second = make_tree(&data.rows, &data.schema, "Play", 0)?;
    assert_eq!(first, second);

    let parallel = TreeBuilder::default()
        .set_num_threads(Some(4))
        .set_parallel_min_rows(1)
        .fit(&data, "Play")?;
    assert_eq!(first, parallel);
    Ok(())
}

#[test]
fn test_play_tennis_unseen_outlook() -> Result<(), Box<dyn Error>> {
    let data = load_play_tennis()?;
    let tree = make_tree(&data.rows, &data.schema, "Play", 0)?;
    let query: Row = ["Fog", "Hot", "High", "Weak", "?"].iter().map(|v| Value::from(*v)).collect();
    assert_eq!(tree.predict_row(&data.schema, &query)?, None);
    Ok(())
}
