use yew::prelude::*;

use crate::hooks::use_entrance;
use crate::motion::entrance::EntranceConfig;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub entrance: EntranceConfig,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a block that fades and rises in once.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let style = use_entrance(node.clone(), props.entrance);

    html! {
        <div ref={node} class={props.class.clone()} style={style.css()}>
            { for props.children.iter() }
        </div>
    }
}
