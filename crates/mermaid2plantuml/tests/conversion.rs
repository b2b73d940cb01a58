//! Conversion tests over complete class diagrams
//!
//! Every case converts a full Mermaid document and compares the exact
//! PlantUML text.

use mermaid2plantuml::{convert, ConvertError};

fn assert_converts(input: &str, expected: &str) {
    let output = convert(input).unwrap_or_else(|err| panic!("conversion failed: {err}"));
    assert_eq!(output, expected);
}

#[test]
fn test_simple_class() {
    assert_converts(
        r#"classDiagram
    class Order {
        +String orderId
        +Date orderDate
        +placeOrder()
    }"#,
        r#"@startuml
class Order {
    +orderId: String
    +orderDate: Date
    +placeOrder()
}
@enduml"#,
    );
}

#[test]
fn test_association_before_blocks() {
    assert_converts(
        r#"classDiagram
    Order *-- Customer
    class Order {
        +String orderId
    }
    class Customer {
        +String name
    }"#,
        r#"@startuml
Order *-- Customer
class Customer {
    +name: String
}
class Order {
    +orderId: String
}
@enduml"#,
    );
}

#[test]
fn test_inheritance() {
    assert_converts(
        r#"classDiagram
    Animal <|-- Dog
    Animal <|-- Cat
    class Animal {
        +String name
        +makeSound()
    }"#,
        r#"@startuml
Animal <|-- Dog
Animal <|-- Cat
class Animal {
    +name: String
    +makeSound()
}
@enduml"#,
    );
}

#[test]
fn test_enumeration() {
    assert_converts(
        r#"classDiagram
    class Status {
        <<enumeration>>
        ACTIVE
        INACTIVE
        SUSPENDED
    }"#,
        r#"@startuml
class Status {
    <<enumeration>>
    ACTIVE
    INACTIVE
    SUSPENDED
}
@enduml"#,
    );
}

#[test]
fn test_enumeration_with_dashed_link() {
    assert_converts(
        r#"classDiagram
    class Order {
        +String id
        +Status status
    }
    class Status {
        <<enumeration>>
        PENDING
        COMPLETED
    }
    Order .. Status"#,
        r#"@startuml
Order .. Status
class Order {
    +id: String
    +status: Status
}
class Status {
    <<enumeration>>
    PENDING
    COMPLETED
}
@enduml"#,
    );
}

#[test]
fn test_multiple_enumerations() {
    assert_converts(
        r#"classDiagram
    class OrderStatus {
        <<enumeration>>
        PENDING
        PROCESSING
        COMPLETED
    }
    class PaymentStatus {
        <<enumeration>>
        UNPAID
        PAID
        REFUNDED
    }
    Order .. OrderStatus
    Order .. PaymentStatus"#,
        r#"@startuml
Order .. OrderStatus
Order .. PaymentStatus
class OrderStatus {
    <<enumeration>>
    PENDING
    PROCESSING
    COMPLETED
}
class PaymentStatus {
    <<enumeration>>
    UNPAID
    PAID
    REFUNDED
}
@enduml"#,
    );
}

#[test]
fn test_interface_realization() {
    assert_converts(
        r#"classDiagram
    class IPaymentProcessor {
        <<interface>>
        +process()
        +refund()
    }
    class StripeProcessor {
        -String apiKey
        +process()
        +refund()
    }
    IPaymentProcessor <|.. StripeProcessor"#,
        r#"@startuml
IPaymentProcessor <|.. StripeProcessor
class IPaymentProcessor {
    <<interface>>
    +process()
    +refund()
}
class StripeProcessor {
    -apiKey: String
    +process()
    +refund()
}
@enduml"#,
    );
}

#[test]
fn test_multiplicities_and_generics() {
    assert_converts(
        r#"classDiagram
    class Order {
        +String id
        +Customer customer
        +List~Product~ products
    }
    class Customer {
        +String name
        +Address address
    }
    class Product {
        +String sku
        +Double price
    }
    class Address {
        +String street
        +String city
    }
    Order "1" *-- "1" Customer
    Order "1" o-- "many" Product
    Customer "1" -- "1" Address"#,
        r#"@startuml
Order "1" *-- "1" Customer
Order "1" o-- "many" Product
Customer "1" -- "1" Address
class Address {
    +street: String
    +city: String
}
class Customer {
    +name: String
    +address: Address
}
class Order {
    +id: String
    +customer: Customer
    +products: List~Product~
}
class Product {
    +sku: String
    +price: Double
}
@enduml"#,
    );
}

#[test]
fn test_visibility_variations() {
    assert_converts(
        r#"classDiagram
    class Example {
        +String publicField
        -String privateField
        #String protectedField
        ~String packageField
        +publicMethod()
        -privateMethod()
        #protectedMethod()
        ~packageMethod()
    }"#,
        r#"@startuml
class Example {
    +publicField: String
    -privateField: String
    #protectedField: String
    ~packageField: String
    +publicMethod()
    -privateMethod()
    #protectedMethod()
    ~packageMethod()
}
@enduml"#,
    );
}

#[test]
fn test_abstract_class() {
    assert_converts(
        r#"classDiagram
    class Shape {
        <<abstract>>
        +Double area
        +calculate()
    }
    class Circle {
        +Double radius
        +calculate()
    }
    class Rectangle {
        +Double width
        +Double height
        +calculate()
    }
    Shape <|-- Circle
    Shape <|-- Rectangle"#,
        r#"@startuml
Shape <|-- Circle
Shape <|-- Rectangle
class Circle {
    +radius: Double
    +calculate()
}
class Rectangle {
    +width: Double
    +height: Double
    +calculate()
}
class Shape {
    <<abstract>>
    +area: Double
    +calculate()
}
@enduml"#,
    );
}

#[test]
fn test_methods_with_parameters() {
    assert_converts(
        r#"classDiagram
    class Calculator {
        +add(Double a, Double b)
        +subtract(Double x, Double y)
        +multiply(Double p, Double q)
        +divide(Double m, Double n)
    }"#,
        r#"@startuml
class Calculator {
    +add(Double a, Double b)
    +subtract(Double x, Double y)
    +multiply(Double p, Double q)
    +divide(Double m, Double n)
}
@enduml"#,
    );
}

#[test]
fn test_multiple_inheritance() {
    assert_converts(
        r#"classDiagram
    class Vehicle {
        +String model
        +start()
        +stop()
    }
    class Engine {
        +Integer power
        +start()
        +stop()
    }
    class ElectricCar {
        +Integer batteryLevel
        +charge()
    }
    Vehicle <|-- ElectricCar
    Engine <|-- ElectricCar"#,
        r#"@startuml
Vehicle <|-- ElectricCar
Engine <|-- ElectricCar
class ElectricCar {
    +batteryLevel: Integer
    +charge()
}
class Engine {
    +power: Integer
    +start()
    +stop()
}
class Vehicle {
    +model: String
    +start()
    +stop()
}
@enduml"#,
    );
}

#[test]
fn test_bidirectional_association() {
    assert_converts(
        r#"classDiagram
    class Student {
        +String name
        +List~Course~ courses
    }
    class Course {
        +String code
        +List~Student~ students
    }
    Student "many" <--> "many" Course"#,
        r#"@startuml
Student "many" <--> "many" Course
class Course {
    +code: String
    +students: List~Student~
}
class Student {
    +name: String
    +courses: List~Course~
}
@enduml"#,
    );
}

#[test]
fn test_association_class() {
    assert_converts(
        r#"classDiagram
    class Order {
        +String orderId
    }
    class Product {
        +String sku
    }
    class OrderItem {
        +Integer quantity
        +Double price
    }
    Order "1" -- "many" Product
    OrderItem .. Order
    OrderItem .. Product"#,
        r#"@startuml
Order "1" -- "many" Product
OrderItem .. Order
OrderItem .. Product
class Order {
    +orderId: String
}
class OrderItem {
    +quantity: Integer
    +price: Double
}
class Product {
    +sku: String
}
@enduml"#,
    );
}

#[test]
fn test_void_methods_and_colon_attributes() {
    assert_converts(
        r#"classDiagram
    class User {
        +name: String
        -password: String
        +void register()
        #void notify(String message)
    }"#,
        r#"@startuml
class User {
    +name: String
    -password: String
    +register()
    #notify(String message)
}
@enduml"#,
    );
}

#[test]
fn test_inline_blocks_comments_and_unstructured_relations() {
    assert_converts(
        r#"classDiagram
    %% inline bodies
    class Point { +Integer x }
    class Empty {}
    direction LR
    A -- B -- C"#,
        r#"@startuml
A -- B -- C
class Empty {
}
class Point {
    +x: Integer
}
@enduml"#,
    );
}

#[test]
fn test_redefinition_last_block_wins() {
    assert_converts(
        r#"classDiagram
    class Order {
        +String first
    }
    class Order {
        +String second
    }"#,
        "@startuml\nclass Order {\n    +second: String\n}\n@enduml",
    );
}

#[test]
fn test_empty_input() {
    assert_converts("", "@startuml\n@enduml");
}

#[test]
fn test_invalid_syntax_marker() {
    let input = r#"classDiagram
    class Order {
        invalid syntax here
    }"#;
    assert_eq!(convert(input), Err(ConvertError::MalformedInput));
}

#[test]
fn test_free_prose_member_fails_whole_conversion() {
    let input = r#"classDiagram
    Order -- Customer
    class Customer {
        +String name
    }
    class Order {
        +String id
        this is a description of the order
    }"#;
    let err = convert(input).unwrap_err();
    assert_eq!(err.line(), Some("this is a description of the order"));
}

#[test]
fn test_unterminated_block_is_dropped() {
    let input = "classDiagram\n    class Order {\n        +String id";
    assert_converts(input, "@startuml\n@enduml");

    let input = "classDiagram\n    Order -- Customer\n    class Customer {\n    }\n    class Order {\n        +String id";
    assert_converts(input, "@startuml\nOrder -- Customer\nclass Customer {\n}\n@enduml");
}
