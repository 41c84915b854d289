pub mod message_input;
