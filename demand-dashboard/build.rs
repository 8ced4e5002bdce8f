use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy the trained model artifact to OUT_DIR for include_str.
    // Fall back to a small linear model so the app still builds and runs
    // without the fixture checked out.
    let model_src = Path::new("../fixtures/bike_model.json");
    if model_src.exists() {
        fs::copy(model_src, Path::new(&out_dir).join("bike_model.json")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("bike_model.json"),
            r#"{
  "descriptor": { "name": "Ridge Regression", "version": "0.0.0" },
  "model": { "type": "linear", "intercept": 40.0,
             "weights": [5.0, 2.0, 4.0, -20.0, 1.0, 10.0, -30.0, 2.5, 0.5, -0.4, -0.3] }
}
"#,
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/bike_model.json");
}
