use pattern_recipe::framework::mock::MockConsole;
use pattern_recipe::framework::{Category, DemoError, Transcript};
use pattern_recipe::lifecycle::PatternSystem;

/// Runs one demo through the full system against a line-checking console.
fn check_transcript(name: &str, expected: &[&str]) {
    let system = PatternSystem::new();
    let mut mock = MockConsole::new();
    mock.expect_lines(expected.iter().copied());

    system
        .run(name, &mut mock)
        .unwrap_or_else(|e| panic!("{name} failed: {e}"));
    mock.verify();
}

#[test]
fn test_chain_of_responsibility_transcript() {
    check_transcript(
        "chain-of-responsibility",
        &[
            "Manager can approve purchase request: PurchaseRequest{amount=500.0}",
            "Director can approve purchase request: PurchaseRequest{amount=5000.0}",
            "No handler can approve purchase request: PurchaseRequest{amount=15000.0}",
        ],
    );
}

#[test]
fn test_command_transcript() {
    check_transcript(
        "command",
        &[
            "--- Executing commands ---",
            "Living Room light is ON",
            "Kitchen light is ON",
            "Television is ON",
            "Television volume set to 15",
            "",
            "--- Undoing commands ---",
            "Television is OFF",
            "Undo executed",
            "Kitchen light is OFF",
            "Undo executed",
            "Living Room light is OFF",
            "Undo executed",
            "No commands to undo",
        ],
    );
}

#[test]
fn test_small_behavioral_transcripts() {
    check_transcript("interpreter", &["Result: 15"]);
    check_transcript("iterator", &["1", "2", "3", "4", "5"]);
    check_transcript("template_method", &["Step 1", "Step 2", "Step 3"]);
}

#[test]
fn test_mediator_transcript() {
    check_transcript(
        "mediator",
        &[
            "--- Chat Room Communication ---",
            "Alice sending: Hello everyone!",
            "Bob received: Hello everyone!",
            "Charlie received: Hello everyone!",
            "Diana received: Hello everyone!",
            "",
            "Bob sending: Hi Alice!",
            "Alice received: Hi Alice!",
            "Charlie received: Hi Alice!",
            "Diana received: Hi Alice!",
            "",
            "Charlie sending: Good morning!",
            "Alice received: Good morning!",
            "Bob received: Good morning!",
            "Diana received: Good morning!",
        ],
    );
}

#[test]
fn test_memento_transcript() {
    check_transcript(
        "memento",
        &[
            "--- Writing and saving states ---",
            "Writing: Hello ",
            "Content: 'Hello ' (cursor at position 6)",
            "Saving editor state...",
            "Writing: World!",
            "Content: 'Hello World!' (cursor at position 12)",
            "Saving editor state...",
            "Writing:  This is a test.",
            "Content: 'Hello World! This is a test.' (cursor at position 28)",
            "Saving editor state...",
            "Writing:  More text here.",
            "Content: 'Hello World! This is a test. More text here.' (cursor at position 44)",
            "",
            "--- Undoing changes ---",
            "History has 3 saved states",
            "Editor state restored",
            "Content: 'Hello World! This is a test.' (cursor at position 28)",
            "Editor state restored",
            "Content: 'Hello World!' (cursor at position 12)",
            "Editor state restored",
            "Content: 'Hello ' (cursor at position 6)",
            "History has 0 saved states",
        ],
    );
}

#[test]
fn test_observer_transcript() {
    let system = PatternSystem::new();
    let mut mock = MockConsole::new();
    mock.expect_lines(["Observer registered"; 3])
        .expect_blank()
        .expect_line("--- First measurements ---")
        .expect_line("Current conditions: 25.5°C and 65.0% humidity")
        .expect_line("Avg/Max/Min temperature: 25.5/25.5/25.5")
        .expect_line("Forecast: Improving weather on the way!")
        .expect_blank()
        .expect_line("--- Second measurements ---")
        .expect_line("Current conditions: 27.8°C and 70.0% humidity")
        .skip_lines(1)
        .expect_line("Forecast: Watch out for cooler, rainy weather")
        .expect_blank()
        .expect_line("--- Third measurements ---")
        .expect_line("Current conditions: 23.3°C and 90.0% humidity")
        .skip_lines(1)
        .expect_line("Forecast: Improving weather on the way!");

    system.run("observer", &mut mock).unwrap();
    mock.verify();
}

#[test]
fn test_state_transcript() {
    check_transcript(
        "state",
        &[
            "=== Vending Machine with 3 products ===",
            "",
            "--- Purchase 1 ---",
            "Coin inserted",
            "Product selected",
            "Dispensing product...",
            "Product released. Products remaining: 2",
            "",
            "--- Purchase 2 ---",
            "Coin inserted",
            "Product selected",
            "Dispensing product...",
            "Product released. Products remaining: 1",
            "",
            "--- Attempt without coin ---",
            "Please insert coin first",
            "Please insert coin first",
            "",
            "--- Insert and eject coin ---",
            "Coin inserted",
            "Coin ejected",
            "",
            "--- Purchase 3 (last product) ---",
            "Coin inserted",
            "Product selected",
            "Dispensing product...",
            "Product released. Products remaining: 0",
            "Out of products!",
            "",
            "--- Attempt when out of stock ---",
            "Machine is out of stock. Coin ejected.",
            "Machine is out of stock",
            "Machine is out of stock",
        ],
    );
}

#[test]
fn test_visitor_transcript() {
    check_transcript(
        "visitor",
        &[
            "=== Price Calculation ===",
            "Keyboard price: $50.0",
            "Monitor price: $300.0 (Screen size: 24\")",
            "Mouse price: $25.0",
            "Total computer price: $375.0",
            "",
            "=== Display Operation ===",
            "Displaying Keyboard",
            "Displaying Monitor",
            "Displaying Mouse",
            "Displaying Computer",
            "",
            "=== XML Export ===",
            "<Computer>",
            "<Keyboard price=\"50.0\"/>",
            "<Monitor price=\"300.0\" screenSize=\"24\"/>",
            "<Mouse price=\"25.0\"/>",
            "</Computer>",
        ],
    );
}

#[test]
fn test_creational_transcripts() {
    check_transcript(
        "abstract_factory",
        &[
            "Sitting on a modern chair",
            "Lying on a modern sofa",
            "",
            "Sitting on a Victorian chair",
            "Lying on a Victorian sofa",
        ],
    );
    check_transcript(
        "builder",
        &[
            "Standard house: House{foundation='Concrete foundation', structure='Concrete and brick structure', \
             roof='Concrete roof', interior='Standard interior', hasGarage=false, hasSwimmingPool=false, hasGarden=false}",
            "",
            "Luxury villa: House{foundation='Reinforced concrete foundation', structure='Premium structure with marble', \
             roof='Spanish tile roof', interior='Luxury interior', hasGarage=true, hasSwimmingPool=true, hasGarden=true}",
        ],
    );
    check_transcript("factory", &["Drawing a Circle", "Drawing a Square"]);
    check_transcript(
        "prototype",
        &[
            "Original field value: 10",
            "Cloned field value: 10",
            "Original field value after cloning: 10",
            "Cloned field value after cloning: 20",
        ],
    );
}

#[test]
fn test_small_structural_transcripts() {
    check_transcript("adapter", &["Square root: 4.0"]);
    check_transcript(
        "decorator",
        &[
            "Cost: 1.0, Description: Simple coffee",
            "Cost: 1.5, Description: Simple coffee, Milk",
            "Cost: 2.2, Description: Simple coffee, Milk, Chocolate",
        ],
    );
    check_transcript(
        "facade",
        &[
            "CPU is processing data",
            "Memory is loading data",
            "HardDrive is reading data",
            "Computer is starting...",
        ],
    );
    check_transcript(
        "proxy",
        &[
            "First call to display():",
            "Loading image from disk: test.jpg",
            "Displaying image: test.jpg",
            "",
            "Second call to display():",
            "Displaying image: test.jpg",
        ],
    );
}

#[test]
fn test_bridge_transcript() {
    check_transcript(
        "bridge",
        &[
            "Remote: Toggling power",
            "TV: Turning on, current volume: 10",
            "BasicRemote: Setting volume",
            "TV: Setting volume to 15",
            "",
            "Remote: Toggling power",
            "Radio: Turning on, current volume: 5",
            "AdvancedRemote: Setting volume with extra features",
            "Radio: Setting volume to 20",
            "AdvancedRemote: Muting device",
            "Radio: Setting volume to 0",
        ],
    );
}

#[test]
fn test_composite_transcript() {
    check_transcript(
        "composite",
        &[
            "File System Structure:",
            "Folder: Root (Total Size: 2515 KB)",
            "  Folder: My Documents (Total Size: 10 KB)",
            "  File: Document.txt (Size: 10 KB)",
            "  Folder: Media (Total Size: 2500 KB)",
            "  File: Image.jpg (Size: 500 KB)",
            "  File: Video.mp4 (Size: 2000 KB)",
            "  File: README.md (Size: 5 KB)",
            "",
            "--- Individual Folder ---",
            "Folder: Media (Total Size: 2500 KB)",
            "  File: Image.jpg (Size: 500 KB)",
            "  File: Video.mp4 (Size: 2000 KB)",
        ],
    );
}

#[test]
fn test_flyweight_transcript() {
    check_transcript(
        "flyweight",
        &[
            "Creating new TreeType: Oak_Green_Rough",
            "Reusing existing TreeType: Oak_Green_Rough",
            "Reusing existing TreeType: Oak_Green_Rough",
            "Creating new TreeType: Pine_Dark Green_Smooth",
            "Reusing existing TreeType: Pine_Dark Green_Smooth",
            "Reusing existing TreeType: Oak_Green_Rough",
            "",
            "Drawing forest with 6 trees:",
            "Drawing tree 'Oak' of color 'Green' with texture 'Rough' at position (10, 20)",
            "Drawing tree 'Oak' of color 'Green' with texture 'Rough' at position (50, 60)",
            "Drawing tree 'Oak' of color 'Green' with texture 'Rough' at position (100, 120)",
            "Drawing tree 'Pine' of color 'Dark Green' with texture 'Smooth' at position (30, 40)",
            "Drawing tree 'Pine' of color 'Dark Green' with texture 'Smooth' at position (70, 80)",
            "Drawing tree 'Oak' of color 'Green' with texture 'Rough' at position (150, 160)",
            "",
            "Total tree types created: 2",
            "Memory saved by using Flyweight pattern!",
        ],
    );
}

/// Full catalog run: every demo once, in catalog order, with banners.
#[test]
fn test_run_all_covers_every_demo() {
    let system = PatternSystem::new();
    let mut out = Transcript::new();

    let count = system.run_all(&mut out, None).unwrap();

    assert_eq!(count, 21);
    let lines = out.lines();
    assert_eq!(lines.first().copied(), Some("=== Chain of Responsibility ==="));
    let banners = lines.iter().filter(|line| line.starts_with("=== ") && line.ends_with(" ===")).count();
    // The state demo prints one banner-shaped heading of its own, the visitor demo three.
    assert_eq!(banners, 21 + 1 + 3);

    let proxy_banner = lines.iter().position(|line| *line == "=== Proxy ===").unwrap();
    assert_eq!(lines[proxy_banner - 1], "");
    assert_eq!(lines.last().copied(), Some("Displaying image: test.jpg"));
}

#[test]
fn test_run_all_by_category() {
    let system = PatternSystem::new();
    for (category, expected) in [
        (Category::Behavioral, 10),
        (Category::Creational, 4),
        (Category::Structural, 7),
    ] {
        let mut out = Transcript::new();
        assert_eq!(system.run_all(&mut out, Some(category)).unwrap(), expected);
    }
}

#[test]
fn test_unknown_demo_is_an_error() {
    let system = PatternSystem::new();
    let mut out = Transcript::new();

    let result = system.run("singleton", &mut out);

    assert!(matches!(result, Err(DemoError::UnknownDemo(name)) if name == "singleton"));
    assert!(out.as_str().is_empty());
}

#[test]
fn test_catalog_lists_as_json() {
    let system = PatternSystem::new();
    let json = serde_json::to_value(system.catalog().infos()).unwrap();

    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 21);
    assert_eq!(rows[0]["name"], "chain_of_responsibility");
    assert_eq!(rows[0]["category"], "behavioral");
    assert_eq!(rows[20]["name"], "proxy");
    assert_eq!(rows[20]["category"], "structural");
}
