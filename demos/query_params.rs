/// `QueryParams` usage example
use urlcore::{QueryParams, normalize_path, normalize_port};

fn main() {
    // Parse a query string
    let params = QueryParams::parse("name=John&tag=a&tag=b&city=Tokyo");

    // Get values
    println!("name: {:?}", params.get("name")); // Some("John")
    println!("tag: {:?}", params.get("tag")); // Some("a")
    println!("tags: {:?}", params.get_list("tag")); // ["a", "b"]
    println!();

    // Every update returns a new instance
    let params = params.add("country", "Japan");
    println!("After add: {params}"); // name=John&tag=a&tag=b&city=Tokyo&country=Japan

    let params = params.set("tag", "c");
    println!("After set: {params}"); // name=John&tag=c&city=Tokyo&country=Japan

    let params = params.remove("city");
    println!("After remove: {params}"); // name=John&tag=c&country=Japan

    let params = params.merge([("name", "Jane"), ("page", "2")]);
    println!("After merge: {params}"); // name=Jane&tag=c&country=Japan&page=2
    println!();

    // Iterate over all parameters
    println!("All parameters:");
    for (key, value) in params.multi_items() {
        println!("  {key} = {value}");
    }
    println!();

    // Other URL components
    println!("path: {}", normalize_path("/docs/./guide/../api/"));
    match normalize_port("8443", "https") {
        Ok(port) => println!("port: {port:?}"),
        Err(err) => println!("port error: {err}"),
    }
}
