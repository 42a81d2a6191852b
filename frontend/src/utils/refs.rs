use leptos::html::ElementDescriptor;
use leptos::*;

/// Something that wants to observe an element once it is attached.
#[derive(Clone)]
pub enum RefSink<T: ElementDescriptor + 'static> {
    Node(NodeRef<T>),
    Callback(Callback<HtmlElement<T>>),
}

impl<T> RefSink<T>
where
    T: ElementDescriptor + Clone + 'static,
{
    fn attach(&self, element: &HtmlElement<T>) {
        match self {
            RefSink::Node(node_ref) => node_ref.load(element),
            RefSink::Callback(callback) => callback.call(element.clone()),
        }
    }
}

impl<T: ElementDescriptor + 'static> From<NodeRef<T>> for RefSink<T> {
    fn from(node_ref: NodeRef<T>) -> Self {
        RefSink::Node(node_ref)
    }
}

impl<T: ElementDescriptor + 'static> From<Callback<HtmlElement<T>>> for RefSink<T> {
    fn from(callback: Callback<HtmlElement<T>>) -> Self {
        RefSink::Callback(callback)
    }
}

/// Returns a ref that, once attached, writes its element into every sink.
pub fn merge_refs<T>(sinks: impl IntoIterator<Item = RefSink<T>>) -> NodeRef<T>
where
    T: ElementDescriptor + Clone + 'static,
{
    let sinks: Vec<RefSink<T>> = sinks.into_iter().collect();
    let merged = create_node_ref::<T>();
    merged.on_load(move |element| {
        for sink in &sinks {
            sink.attach(&element);
        }
    });
    merged
}
