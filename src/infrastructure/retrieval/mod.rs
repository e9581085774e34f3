//! Vector retriever implementations

pub mod pinecone;

pub use pinecone::PineconeRetriever;
